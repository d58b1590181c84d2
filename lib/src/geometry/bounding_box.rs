//! Axis-aligned 3D bounding box.

use super::Point3F;
use crate::CoordF;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 3D axis-aligned bounding box with floating-point coordinates.
///
/// An empty box is "undefined" until the first point is merged.
#[derive(Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox3F {
    pub min: Point3F,
    pub max: Point3F,
    defined: bool,
}

impl BoundingBox3F {
    /// Create a new undefined bounding box.
    #[inline]
    fn new() -> Self {
        Self {
            min: Point3F::zero(),
            max: Point3F::zero(),
            defined: false,
        }
    }

    /// Build the tightest box around a set of points.
    pub fn from_points<I: IntoIterator<Item = Point3F>>(points: I) -> Self {
        let mut bb = Self::new();
        for p in points {
            bb.merge_point(p);
        }
        bb
    }

    /// Check if the bounding box is defined.
    #[inline]
    pub fn is_defined(&self) -> bool {
        self.defined
    }

    /// Merge a point into the bounding box.
    pub fn merge_point(&mut self, p: Point3F) {
        if self.defined {
            self.min.x = self.min.x.min(p.x);
            self.min.y = self.min.y.min(p.y);
            self.min.z = self.min.z.min(p.z);
            self.max.x = self.max.x.max(p.x);
            self.max.y = self.max.y.max(p.y);
            self.max.z = self.max.z.max(p.z);
        } else {
            self.min = p;
            self.max = p;
            self.defined = true;
        }
    }

    /// Extent along each axis (zero when undefined).
    #[inline]
    pub fn size(&self) -> Point3F {
        if self.defined {
            self.max - self.min
        } else {
            Point3F::zero()
        }
    }

    /// Get the center.
    #[inline]
    pub fn center(&self) -> Point3F {
        Point3F::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// Largest extent over the three axes.
    pub fn max_extent(&self) -> CoordF {
        let s = self.size();
        s.x.max(s.y).max(s.z)
    }
}

impl fmt::Debug for BoundingBox3F {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.defined {
            write!(f, "BoundingBox3F({:?} - {:?})", self.min, self.max)
        } else {
            write!(f, "BoundingBox3F(undefined)")
        }
    }
}

impl fmt::Display for BoundingBox3F {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.defined {
            write!(f, "[{} - {}]", self.min, self.max)
        } else {
            write!(f, "[undefined]")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_box() {
        let bb = BoundingBox3F::new();
        assert!(!bb.is_defined());
        assert_eq!(bb.size(), Point3F::zero());
        assert_eq!(bb.to_string(), "[undefined]");
    }

    #[test]
    fn test_from_points() {
        let bb = BoundingBox3F::from_points(vec![
            Point3F::new(1.0, -2.0, 0.0),
            Point3F::new(-1.0, 4.0, 3.0),
            Point3F::new(0.0, 0.0, -5.0),
        ]);
        assert!(bb.is_defined());
        assert!(bb.min.approx_eq(&Point3F::new(-1.0, -2.0, -5.0), 1e-12));
        assert!(bb.max.approx_eq(&Point3F::new(1.0, 4.0, 3.0), 1e-12));
        assert!((bb.max_extent() - 8.0).abs() < 1e-12);
        assert!(bb.center().approx_eq(&Point3F::new(0.0, 1.0, -1.0), 1e-12));
    }

    #[test]
    fn test_single_point_box_has_zero_size() {
        let bb = BoundingBox3F::from_points([Point3F::new(2.0, 2.0, 2.0)]);
        assert!(bb.is_defined());
        assert_eq!(bb.size(), Point3F::zero());
    }
}
