//! Geometry value types.
//!
//! - [`Point3F`] - A 3D point with floating-point coordinates
//! - [`BoundingBox3F`] - An axis-aligned 3D bounding box

mod bounding_box;
mod point;

pub use bounding_box::BoundingBox3F;
pub use point::Point3F;
