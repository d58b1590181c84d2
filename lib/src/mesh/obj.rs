//! Wavefront OBJ loading.
//!
//! Reads the geometry subset of the OBJ text format:
//! - `v x y z` - vertex position
//! - `vn x y z` - vertex normal (parsed, not kept in the mesh)
//! - `vt u [v [w]]` - texture coordinate (counted only)
//! - `f a[/b[/c]] ...` - face, 1-based `vertex/texture/normal` references
//!
//! Every other directive (`o`, `g`, `s`, `mtllib`, `usemtl`, ...) is skipped.
//! Each face contributes exactly one triangle built from its first three
//! corners; further corners are dropped, not fan-triangulated.

use super::report::{LoadEvent, LoadReporter, LogReporter, ObjStats};
use super::{Mesh, Triangle};
use crate::config::{LoadOptions, MissingFilePolicy};
use crate::geometry::{BoundingBox3F, Point3F};
use crate::{CoordF, Error, ParseErrorKind, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

type LineResult<T> = std::result::Result<T, ParseErrorKind>;

/// Load a mesh from an OBJ file with default options.
///
/// A path that does not exist yields an empty mesh. Progress is reported
/// through the `log` facade.
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Mesh> {
    load_obj_with(path, &LoadOptions::default(), &LogReporter)
}

/// Load a mesh from an OBJ file.
pub fn load_obj_with<P: AsRef<Path>>(
    path: P,
    options: &LoadOptions,
    reporter: &dyn LoadReporter,
) -> Result<Mesh> {
    let path = path.as_ref();
    reporter.report(&LoadEvent::Started { path });

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            reporter.report(&LoadEvent::MissingFile { path });
            return match options.missing_file {
                MissingFilePolicy::Empty => Ok(Mesh::empty()),
                MissingFilePolicy::Error => Err(Error::NotFound(path.to_path_buf())),
            };
        }
        Err(e) => return Err(Error::Io(e)),
    };
    ObjParser::new(options, reporter).parse(BufReader::new(file))
}

/// Parse OBJ text from a buffered reader with default options.
pub fn parse_obj<R: BufRead>(reader: R, reporter: &dyn LoadReporter) -> Result<Mesh> {
    ObjParser::new(&LoadOptions::default(), reporter).parse(reader)
}

/// One corner of a face line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FaceCorner {
    /// 0-based vertex index, already checked against the vertex count.
    vertex: u32,
    /// 1-based texture reference; `None` when the subfield is absent, empty or 0.
    texture: Option<u32>,
    /// 1-based normal reference; `None` when the subfield is absent, empty or 0.
    normal: Option<u32>,
}

impl FaceCorner {
    /// Parse a `v`, `v/t`, `v//n` or `v/t/n` corner token.
    fn parse(token: &str, vertex_count: usize) -> LineResult<Self> {
        let mut fields = token.split('/');
        let vertex = fields.next().unwrap_or_default();
        let texture = fields.next();
        let normal = fields.next();
        if fields.next().is_some() {
            return Err(ParseErrorKind::TooManySubfields {
                corner: token.to_string(),
            });
        }

        if vertex.is_empty() {
            return Err(ParseErrorKind::MissingVertexIndex {
                corner: token.to_string(),
            });
        }
        let index: i64 = vertex.parse().map_err(|_| ParseErrorKind::InvalidIndex {
            value: vertex.to_string(),
        })?;

        Ok(Self {
            vertex: resolve_vertex_index(index, vertex_count)?,
            texture: parse_reference(texture)?,
            normal: parse_reference(normal)?,
        })
    }
}

/// Convert a 1-based vertex reference to a 0-based index.
///
/// Only vertices defined before the face line are valid targets.
fn resolve_vertex_index(index: i64, vertex_count: usize) -> LineResult<u32> {
    let out_of_range = || ParseErrorKind::VertexIndexOutOfRange {
        index,
        vertex_count,
    };

    if index < 1 {
        return Err(out_of_range());
    }
    let zero_based = usize::try_from(index - 1).map_err(|_| out_of_range())?;
    if zero_based >= vertex_count {
        return Err(out_of_range());
    }
    u32::try_from(zero_based).map_err(|_| out_of_range())
}

/// Parse an optional texture or normal subfield.
fn parse_reference(field: Option<&str>) -> LineResult<Option<u32>> {
    match field {
        None | Some("") => Ok(None),
        Some(value) => {
            let index: u32 = value.parse().map_err(|_| ParseErrorKind::InvalidIndex {
                value: value.to_string(),
            })?;
            Ok((index != 0).then_some(index))
        }
    }
}

/// All corners of one face line.
#[derive(Clone, Debug, PartialEq, Eq)]
struct FaceRecord {
    corners: Vec<FaceCorner>,
}

impl FaceRecord {
    fn parse<'s, I>(tokens: I, vertex_count: usize) -> LineResult<Self>
    where
        I: Iterator<Item = &'s str>,
    {
        let corners = tokens
            .map(|token| FaceCorner::parse(token, vertex_count))
            .collect::<LineResult<Vec<_>>>()?;

        if corners.len() < 3 {
            return Err(ParseErrorKind::TooFewCorners {
                found: corners.len(),
            });
        }
        Ok(Self { corners })
    }

    /// The triangle formed by the first three corners.
    fn triangle(&self) -> Triangle {
        Triangle::new(
            self.corners[0].vertex,
            self.corners[1].vertex,
            self.corners[2].vertex,
        )
    }
}

/// Parse the three leading numeric fields of a `v` or `vn` line.
fn parse_point<'s, I>(tokens: I, directive: &'static str) -> LineResult<Point3F>
where
    I: Iterator<Item = &'s str>,
{
    let mut coords = [0.0 as CoordF; 3];
    let mut found = 0;
    for token in tokens.take(3) {
        coords[found] = token.parse().map_err(|_| ParseErrorKind::InvalidNumber {
            value: token.to_string(),
        })?;
        found += 1;
    }

    if found < 3 {
        return Err(ParseErrorKind::MissingField {
            directive,
            expected: 3,
            found,
        });
    }
    Ok(Point3F::new(coords[0], coords[1], coords[2]))
}

/// Line-by-line OBJ parser state.
struct ObjParser<'a> {
    options: &'a LoadOptions,
    reporter: &'a dyn LoadReporter,
    vertices: Vec<Point3F>,
    normals: Vec<Point3F>,
    texture_coords: usize,
    faces: Vec<FaceRecord>,
    truncated_faces: usize,
}

impl<'a> ObjParser<'a> {
    fn new(options: &'a LoadOptions, reporter: &'a dyn LoadReporter) -> Self {
        Self {
            options,
            reporter,
            vertices: Vec::new(),
            normals: Vec::new(),
            texture_coords: 0,
            faces: Vec::new(),
            truncated_faces: 0,
        }
    }

    fn parse<R: BufRead>(mut self, reader: R) -> Result<Mesh> {
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            self.parse_line(line_no, &line)
                .map_err(|kind| Error::Parse {
                    line: line_no,
                    kind,
                })?;
        }
        Ok(self.finish())
    }

    fn parse_line(&mut self, line_no: usize, line: &str) -> LineResult<()> {
        // A token starting with '#' comments out the rest of the line.
        let mut tokens = line
            .split_whitespace()
            .take_while(|token| !token.starts_with('#'));

        let Some(directive) = tokens.next() else {
            return Ok(());
        };

        match directive {
            "v" => {
                let position = parse_point(tokens, "v")?;
                self.vertices.push(position);
            }
            "vn" => {
                let normal = parse_point(tokens, "vn")?;
                self.normals.push(normal);
            }
            "vt" => {
                // Texture coordinates are not part of the mesh.
                self.texture_coords += 1;
            }
            "f" => {
                let face = FaceRecord::parse(tokens, self.vertices.len())?;
                if face.corners.len() > 3 {
                    self.truncated_faces += 1;
                    if self.options.report_truncated_faces {
                        self.reporter.report(&LoadEvent::PolygonTruncated {
                            line: line_no,
                            corners: face.corners.len(),
                        });
                    }
                }
                self.faces.push(face);
            }
            _ => {}
        }
        Ok(())
    }

    fn corners(&self) -> impl Iterator<Item = &FaceCorner> + '_ {
        self.faces.iter().flat_map(|face| face.corners.iter())
    }

    fn finish(self) -> Mesh {
        let triangles: Vec<Triangle> = self.faces.iter().map(FaceRecord::triangle).collect();

        let stats = ObjStats {
            vertices: self.vertices.len(),
            normals: self.normals.len(),
            texture_coords: self.texture_coords,
            faces: self.faces.len(),
            triangles: triangles.len(),
            truncated_faces: self.truncated_faces,
            texture_refs: self.corners().filter(|c| c.texture.is_some()).count(),
            normal_refs: self.corners().filter(|c| c.normal.is_some()).count(),
            bounds: BoundingBox3F::from_points(self.vertices.iter().copied()),
        };
        self.reporter.report(&LoadEvent::Finished { stats: &stats });

        Mesh::from_parts(&self.vertices, triangles)
    }
}
