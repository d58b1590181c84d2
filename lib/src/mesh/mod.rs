//! Mesh loading.
//!
//! This module provides the mesh data model and the OBJ loader:
//! - [`Mesh`] - Indexed triangle mesh with parallel x/y/z sequences
//! - [`Triangle`] - A single triangle
//! - OBJ file loading ([`load_obj`], [`load_obj_with`], [`parse_obj`])
//! - Load progress reporting ([`LoadReporter`])

mod obj;
mod report;
mod triangle_mesh;

pub use obj::{load_obj, load_obj_with, parse_obj};
pub use report::{LoadEvent, LoadReporter, LogReporter, ObjStats, SilentReporter};
pub use triangle_mesh::{Mesh, Triangle};
