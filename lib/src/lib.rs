//! OBJ mesh loading for the slicer.
//!
//! This crate reads Wavefront OBJ text files into an indexed triangle mesh
//! and hands the result to a rendering collaborator:
//! - [`mesh`] - The [`Mesh`](mesh::Mesh) data model and the OBJ loader
//! - [`geometry`] - Point and bounding box value types
//! - [`config`] - Loader options
//! - [`render`] - The renderer interface and a text summary renderer
//!
//! # Example
//! ```
//! use obj_slicer::mesh::{parse_obj, SilentReporter};
//!
//! let source = "v 0 0 0\nv 1 0 0\nv 1 1 0\nf 1 2 3\n";
//! let mesh = parse_obj(source.as_bytes(), &SilentReporter).unwrap();
//! assert_eq!(mesh.vertex_count(), 3);
//! assert_eq!(mesh.triangles()[0].indices, [0, 1, 2]);
//! ```

pub mod config;
pub mod geometry;
pub mod mesh;
pub mod render;

use std::fmt;
use std::path::PathBuf;

/// Floating-point coordinate type (in model units).
pub type CoordF = f64;

/// Crate-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },

    #[error("Mesh file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Render error: {0}")]
    Render(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// What was wrong with a rejected OBJ line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A directive had fewer numeric fields than it needs.
    MissingField {
        directive: &'static str,
        expected: usize,
        found: usize,
    },
    /// A coordinate field could not be parsed as a number.
    InvalidNumber { value: String },
    /// A face listed fewer than three corners.
    TooFewCorners { found: usize },
    /// A face corner had an empty vertex subfield (e.g. `/2/3`).
    MissingVertexIndex { corner: String },
    /// A face reference was not an integer.
    InvalidIndex { value: String },
    /// A face corner had more than `vertex/texture/normal`.
    TooManySubfields { corner: String },
    /// A face vertex index pointed outside the vertices read so far.
    VertexIndexOutOfRange { index: i64, vertex_count: usize },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField {
                directive,
                expected,
                found,
            } => write!(
                f,
                "'{}' needs {} fields, found {}",
                directive, expected, found
            ),
            Self::InvalidNumber { value } => write!(f, "invalid number '{}'", value),
            Self::TooFewCorners { found } => {
                write!(f, "face needs at least 3 corners, found {}", found)
            }
            Self::MissingVertexIndex { corner } => {
                write!(f, "face corner '{}' has no vertex index", corner)
            }
            Self::InvalidIndex { value } => write!(f, "invalid index '{}'", value),
            Self::TooManySubfields { corner } => write!(
                f,
                "face corner '{}' has more than vertex/texture/normal",
                corner
            ),
            Self::VertexIndexOutOfRange {
                index,
                vertex_count,
            } => write!(
                f,
                "vertex index {} out of range (only {} vertices defined)",
                index, vertex_count
            ),
        }
    }
}

impl Error {
    /// Line number of a parse error, if this is one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }
}
