//! Renderer collaborator interface.
//!
//! Drawing a mesh is left to an external [`MeshRenderer`]. The crate only
//! hands over the three coordinate sequences and the triangle list of an
//! already loaded [`Mesh`], together with a [`RenderStyle`].
//!
//! [`SummaryRenderer`] is a text stand-in that describes the mesh instead of
//! plotting it.

use crate::geometry::{BoundingBox3F, Point3F};
use crate::mesh::{Mesh, Triangle};
use crate::{CoordF, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// How a renderer should draw the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// Filled triangles.
    Surface,
    /// Edges only.
    Wireframe,
    /// Filled triangles with edges drawn on top.
    #[default]
    Mesh,
    /// Vertices only.
    Points,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Representation::Surface => "surface",
            Representation::Wireframe => "wireframe",
            Representation::Mesh => "mesh",
            Representation::Points => "points",
        };
        f.write_str(name)
    }
}

/// Visual parameters handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// RGB color, each channel in 0.0 - 1.0.
    pub color: [f32; 3],
    /// Opacity (0.0 = transparent, 1.0 = opaque).
    pub opacity: f32,
    /// Edge line width (pixels).
    pub line_width: f32,
    /// Surface representation.
    pub representation: Representation,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            color: [0.5, 0.5, 0.9],
            opacity: 0.5,
            line_width: 1.0,
            representation: Representation::Mesh,
        }
    }
}

impl RenderStyle {
    /// Create a style with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color.
    pub fn color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.color = [r, g, b];
        self
    }

    /// Set the opacity.
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set the line width.
    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    /// Set the representation.
    pub fn representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    /// Check that every value is in range.
    pub fn validate(&self) -> Result<()> {
        let unit = 0.0..=1.0;
        if !self.color.iter().all(|c| unit.contains(c)) {
            return Err(Error::Render(format!(
                "color channels must be in 0.0 - 1.0, got {:?}",
                self.color
            )));
        }
        if !unit.contains(&self.opacity) {
            return Err(Error::Render(format!(
                "opacity must be in 0.0 - 1.0, got {}",
                self.opacity
            )));
        }
        if !(self.line_width > 0.0) {
            return Err(Error::Render(format!(
                "line width must be positive, got {}",
                self.line_width
            )));
        }
        Ok(())
    }
}

/// A consumer that displays a mesh.
///
/// Implementations receive read-only views of a loaded mesh and must not
/// assume anything about how it was produced.
pub trait MeshRenderer {
    fn render(
        &mut self,
        x: &[CoordF],
        y: &[CoordF],
        z: &[CoordF],
        triangles: &[Triangle],
        style: &RenderStyle,
    ) -> Result<()>;
}

/// Hand a mesh to a renderer.
pub fn render_mesh(
    mesh: &Mesh,
    renderer: &mut dyn MeshRenderer,
    style: &RenderStyle,
) -> Result<()> {
    style.validate()?;
    log::info!("Rendering mesh ({:?})", mesh);
    renderer.render(mesh.x(), mesh.y(), mesh.z(), mesh.triangles(), style)
}

/// Writes a plain-text description of the mesh instead of drawing it.
pub struct SummaryRenderer<W: Write> {
    writer: W,
}

impl<W: Write> SummaryRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MeshRenderer for SummaryRenderer<W> {
    fn render(
        &mut self,
        x: &[CoordF],
        y: &[CoordF],
        z: &[CoordF],
        triangles: &[Triangle],
        style: &RenderStyle,
    ) -> Result<()> {
        if x.len() != y.len() || x.len() != z.len() {
            return Err(Error::Render(format!(
                "coordinate sequences differ in length ({}, {}, {})",
                x.len(),
                y.len(),
                z.len()
            )));
        }

        let bounds = BoundingBox3F::from_points(
            x.iter()
                .zip(y)
                .zip(z)
                .map(|((&x, &y), &z)| Point3F::new(x, y, z)),
        );

        writeln!(
            self.writer,
            "mesh: {} vertices, {} triangles",
            x.len(),
            triangles.len()
        )?;
        writeln!(self.writer, "bounds: {}", bounds)?;
        if bounds.is_defined() {
            writeln!(self.writer, "size: {}", bounds.size())?;
            writeln!(
                self.writer,
                "center: {}, max extent: {:.6}",
                bounds.center(),
                bounds.max_extent()
            )?;
        }
        writeln!(
            self.writer,
            "style: {}, color ({:.2}, {:.2}, {:.2}), opacity {:.2}, line width {:.2}",
            style.representation,
            style.color[0],
            style.color[1],
            style.color[2],
            style.opacity,
            style.line_width
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{parse_obj, SilentReporter};

    struct CapturingRenderer {
        vertices: usize,
        triangles: Vec<Triangle>,
        style: Option<RenderStyle>,
    }

    impl MeshRenderer for CapturingRenderer {
        fn render(
            &mut self,
            x: &[CoordF],
            _y: &[CoordF],
            _z: &[CoordF],
            triangles: &[Triangle],
            style: &RenderStyle,
        ) -> Result<()> {
            self.vertices = x.len();
            self.triangles = triangles.to_vec();
            self.style = Some(*style);
            Ok(())
        }
    }

    fn triangle_mesh() -> Mesh {
        parse_obj("v 0 0 0\nv 2 0 0\nv 0 3 1\nf 1 2 3\n".as_bytes(), &SilentReporter).unwrap()
    }

    #[test]
    fn test_render_style_default() {
        let style = RenderStyle::default();
        assert_eq!(style.color, [0.5, 0.5, 0.9]);
        assert!((style.opacity - 0.5).abs() < 1e-6);
        assert!((style.line_width - 1.0).abs() < 1e-6);
        assert_eq!(style.representation, Representation::Mesh);
        assert!(style.validate().is_ok());
    }

    #[test]
    fn test_render_style_validate() {
        assert!(RenderStyle::new().opacity(1.5).validate().is_err());
        assert!(RenderStyle::new().color(0.0, -0.1, 0.0).validate().is_err());
        assert!(RenderStyle::new().line_width(0.0).validate().is_err());
        assert!(RenderStyle::new()
            .representation(Representation::Wireframe)
            .opacity(1.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_render_mesh_hands_over_sequences() {
        let mesh = triangle_mesh();
        let mut renderer = CapturingRenderer {
            vertices: 0,
            triangles: Vec::new(),
            style: None,
        };
        let style = RenderStyle::new().representation(Representation::Surface);

        render_mesh(&mesh, &mut renderer, &style).unwrap();

        assert_eq!(renderer.vertices, 3);
        assert_eq!(renderer.triangles, vec![Triangle::new(0, 1, 2)]);
        assert_eq!(renderer.style, Some(style));
    }

    #[test]
    fn test_render_mesh_rejects_invalid_style() {
        let mesh = triangle_mesh();
        let mut renderer = SummaryRenderer::new(Vec::new());
        let result = render_mesh(&mesh, &mut renderer, &RenderStyle::new().opacity(-1.0));
        assert!(matches!(result, Err(Error::Render(_))));
        assert!(renderer.into_inner().is_empty());
    }

    #[test]
    fn test_summary_renderer_output() {
        let mesh = triangle_mesh();
        let mut renderer = SummaryRenderer::new(Vec::new());
        render_mesh(&mesh, &mut renderer, &RenderStyle::default()).unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(output.starts_with("mesh: 3 vertices, 1 triangles\n"));
        assert!(output.contains("style: mesh,"));
        assert!(output.contains("center: (1.000000, 1.500000, 0.500000), max extent: 3.000000"));
    }

    #[test]
    fn test_summary_renderer_empty_mesh() {
        let mut renderer = SummaryRenderer::new(Vec::new());
        render_mesh(&Mesh::empty(), &mut renderer, &RenderStyle::default()).unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(output.contains("bounds: [undefined]"));
        assert!(!output.contains("size:"));
        assert!(!output.contains("center:"));
    }

    #[test]
    fn test_summary_renderer_rejects_ragged_sequences() {
        let mut renderer = SummaryRenderer::new(Vec::new());
        let result = renderer.render(&[0.0, 1.0], &[0.0], &[0.0, 1.0], &[], &RenderStyle::default());
        assert!(matches!(result, Err(Error::Render(_))));
    }
}
