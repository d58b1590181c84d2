//! Load progress reporting.
//!
//! The loader never prints. It describes what it is doing through a
//! [`LoadReporter`], so embedders decide where notices go and tests can
//! stay silent.

use crate::geometry::BoundingBox3F;
use std::fmt;
use std::path::Path;

/// Counts gathered while parsing an OBJ source.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ObjStats {
    /// `v` lines.
    pub vertices: usize,
    /// `vn` lines.
    pub normals: usize,
    /// `vt` lines.
    pub texture_coords: usize,
    /// `f` lines.
    pub faces: usize,
    /// Triangles in the resulting mesh.
    pub triangles: usize,
    /// Faces with more than three corners.
    pub truncated_faces: usize,
    /// Face corners carrying a texture reference.
    pub texture_refs: usize,
    /// Face corners carrying a normal reference.
    pub normal_refs: usize,
    /// Bounds of the vertex positions.
    pub bounds: BoundingBox3F,
}

impl fmt::Display for ObjStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vertices, {} normals, {} texture coords, {} faces ({} triangles)",
            self.vertices, self.normals, self.texture_coords, self.faces, self.triangles
        )?;
        if self.truncated_faces > 0 {
            write!(f, ", {} faces truncated to 3 corners", self.truncated_faces)?;
        }
        Ok(())
    }
}

/// Something the loader wants to tell the outside world.
#[derive(Clone, Copy, Debug)]
pub enum LoadEvent<'a> {
    /// A file is about to be read.
    Started { path: &'a Path },
    /// The requested file does not exist.
    MissingFile { path: &'a Path },
    /// A face had more than three corners; only the first three are kept.
    PolygonTruncated { line: usize, corners: usize },
    /// Parsing finished successfully.
    Finished { stats: &'a ObjStats },
}

/// Receives progress notices from the loader.
///
/// Reporting is observational only and never changes the loaded mesh.
pub trait LoadReporter {
    fn report(&self, event: &LoadEvent<'_>);
}

/// Forwards load events to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl LoadReporter for LogReporter {
    fn report(&self, event: &LoadEvent<'_>) {
        match event {
            LoadEvent::Started { path } => {
                log::info!("Loading OBJ file '{}'", path.display());
            }
            LoadEvent::MissingFile { path } => {
                log::warn!("OBJ file '{}' does not exist", path.display());
            }
            LoadEvent::PolygonTruncated { line, corners } => {
                log::warn!(
                    "Line {}: face has {} corners, keeping only the first 3",
                    line,
                    corners
                );
            }
            LoadEvent::Finished { stats } => {
                log::info!("Loaded {}", stats);
                if stats.bounds.is_defined() {
                    log::debug!("Bounding box: {}", stats.bounds);
                }
            }
        }
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentReporter;

impl LoadReporter for SilentReporter {
    fn report(&self, _event: &LoadEvent<'_>) {}
}
