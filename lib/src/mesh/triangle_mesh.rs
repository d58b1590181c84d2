//! Indexed triangle mesh data model.
//!
//! This module provides the [`Mesh`] type produced by the OBJ loader:
//! three parallel coordinate sequences plus a list of vertex index triples.

use crate::geometry::{BoundingBox3F, Point3F};
use crate::CoordF;
use serde::Serialize;
use std::fmt;

/// A single triangle defined by three vertex indices.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Triangle {
    /// Indices into the vertex sequences for the three corners.
    pub indices: [u32; 3],
}

impl Triangle {
    /// Create a new triangle from vertex indices.
    #[inline]
    pub const fn new(v0: u32, v1: u32, v2: u32) -> Self {
        Self {
            indices: [v0, v1, v2],
        }
    }
}

impl fmt::Debug for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Triangle({}, {}, {})",
            self.indices[0], self.indices[1], self.indices[2]
        )
    }
}

impl From<[u32; 3]> for Triangle {
    #[inline]
    fn from(indices: [u32; 3]) -> Self {
        Self { indices }
    }
}

impl From<(u32, u32, u32)> for Triangle {
    #[inline]
    fn from((v0, v1, v2): (u32, u32, u32)) -> Self {
        Self::new(v0, v1, v2)
    }
}

impl From<Triangle> for [u32; 3] {
    #[inline]
    fn from(tri: Triangle) -> Self {
        tri.indices
    }
}

/// An indexed triangle mesh.
///
/// Vertex coordinates are stored as three parallel sequences of equal
/// length, in file order. Every triangle index is below [`vertex_count`].
/// A mesh is immutable once built; only the loader constructs non-empty
/// meshes.
///
/// [`vertex_count`]: Mesh::vertex_count
#[derive(Clone, Default, PartialEq, Serialize)]
pub struct Mesh {
    x: Vec<CoordF>,
    y: Vec<CoordF>,
    z: Vec<CoordF>,
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// The mesh with no vertices and no triangles.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            z: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Build a mesh from vertex positions and triangles.
    ///
    /// Callers must have checked every triangle index against `vertices`.
    pub(crate) fn from_parts(vertices: &[Point3F], triangles: Vec<Triangle>) -> Self {
        debug_assert!(triangles
            .iter()
            .all(|t| t.indices.iter().all(|&i| (i as usize) < vertices.len())));

        Self {
            x: vertices.iter().map(|v| v.x).collect(),
            y: vertices.iter().map(|v| v.y).collect(),
            z: vertices.iter().map(|v| v.z).collect(),
            triangles,
        }
    }

    /// X coordinates, one per vertex.
    #[inline]
    pub fn x(&self) -> &[CoordF] {
        &self.x
    }

    /// Y coordinates, one per vertex.
    #[inline]
    pub fn y(&self) -> &[CoordF] {
        &self.y
    }

    /// Z coordinates, one per vertex.
    #[inline]
    pub fn z(&self) -> &[CoordF] {
        &self.z
    }

    /// Triangles in face order.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Get the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.x.len()
    }

    /// Get the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Check if the mesh has neither vertices nor triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() && self.triangles.is_empty()
    }

    /// Get a vertex position by index.
    pub fn vertex(&self, idx: usize) -> Option<Point3F> {
        Some(Point3F::new(
            *self.x.get(idx)?,
            *self.y.get(idx)?,
            *self.z.get(idx)?,
        ))
    }

    /// Iterate over vertex positions in order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = Point3F> + '_ {
        (0..self.vertex_count()).map(move |i| Point3F::new(self.x[i], self.y[i], self.z[i]))
    }

    /// Get the three corner positions of a triangle.
    pub fn triangle_vertices(&self, tri_idx: usize) -> Option<[Point3F; 3]> {
        let tri = self.triangles.get(tri_idx)?;
        Some([
            self.vertex(tri.indices[0] as usize)?,
            self.vertex(tri.indices[1] as usize)?,
            self.vertex(tri.indices[2] as usize)?,
        ])
    }

    /// Compute the bounding box of all vertices.
    pub fn bounding_box(&self) -> BoundingBox3F {
        BoundingBox3F::from_points(self.vertices())
    }
}

impl fmt::Debug for Mesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mesh({} vertices, {} triangles)",
            self.vertex_count(),
            self.triangle_count()
        )
    }
}

impl fmt::Display for Mesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mesh: {} vertices, {} triangles",
            self.vertex_count(),
            self.triangle_count()
        )?;
        let bb = self.bounding_box();
        if bb.is_defined() {
            write!(f, ", bounds: {}", bb)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Mesh {
        let vertices = [
            Point3F::new(0.0, 0.0, 0.0),
            Point3F::new(1.0, 0.0, 0.0),
            Point3F::new(1.0, 1.0, 0.0),
            Point3F::new(0.0, 1.0, 0.0),
        ];
        Mesh::from_parts(
            &vertices,
            vec![Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)],
        )
    }

    #[test]
    fn test_triangle_new() {
        let tri = Triangle::new(0, 1, 2);
        assert_eq!(tri.indices, [0, 1, 2]);
        assert_eq!(Triangle::from((0, 1, 2)), tri);
        assert_eq!(<[u32; 3]>::from(tri), [0, 1, 2]);
    }

    #[test]
    fn test_mesh_empty() {
        let mesh = Mesh::empty();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(!mesh.bounding_box().is_defined());
        assert_eq!(mesh, Mesh::default());
    }

    #[test]
    fn test_mesh_parallel_sequences() {
        let mesh = unit_square();
        assert_eq!(mesh.x(), &[0.0, 1.0, 1.0, 0.0]);
        assert_eq!(mesh.y(), &[0.0, 0.0, 1.0, 1.0]);
        assert_eq!(mesh.z(), &[0.0, 0.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices().len(), 4);
    }

    #[test]
    fn test_mesh_vertex_lookup() {
        let mesh = unit_square();
        let v = mesh.vertex(2).unwrap();
        assert!(v.approx_eq(&Point3F::new(1.0, 1.0, 0.0), 1e-12));
        assert!(mesh.vertex(4).is_none());

        let [a, b, c] = mesh.triangle_vertices(1).unwrap();
        assert_eq!(a, Point3F::new(0.0, 0.0, 0.0));
        assert_eq!(b, Point3F::new(1.0, 1.0, 0.0));
        assert_eq!(c, Point3F::new(0.0, 1.0, 0.0));
        assert!(mesh.triangle_vertices(2).is_none());
    }

    #[test]
    fn test_mesh_bounding_box() {
        let bb = unit_square().bounding_box();
        assert!(bb.is_defined());
        assert!(bb.max.approx_eq(&Point3F::new(1.0, 1.0, 0.0), 1e-12));
    }

    #[test]
    fn test_mesh_debug_and_display() {
        let mesh = unit_square();
        assert_eq!(format!("{:?}", mesh), "Mesh(4 vertices, 2 triangles)");
        assert!(mesh.to_string().starts_with("Mesh: 4 vertices, 2 triangles, bounds:"));
    }
}
