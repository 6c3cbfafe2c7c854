//! Textured triangle mesh loaded from a Wavefront-style text description.
//!
//! Only three kinds of lines are understood:
//!
//! ```text
//! v  <x> <y> <z>              vertex position
//! vt  <u> <v> <w>             texture coordinate (two spaces after `vt`)
//! f  v/t/n v/t/n v/t/n ...    face corners, 1-based indices
//! ```
//!
//! Every other line is ignored. Indices are converted to 0-based while
//! parsing, so nothing past this module ever sees the file's numbering.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::math::vec3::Vec3;

const VERTEX_PREFIX: &str = "v ";
// Texture coordinate lines must carry two spaces after the marker; a single
// space is not recognised and the line is skipped.
const TEX_COORD_PREFIX: &str = "vt  ";
const FACE_PREFIX: &str = "f ";

/// Errors reading or parsing a mesh description.
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    /// A face index that cannot be converted to 0-based. `line` is 1-based.
    Parse { line: usize, message: String },
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Parse { .. } => None,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "I/O error loading mesh: {}", err),
            LoadError::Parse { line, message } => {
                write!(f, "malformed mesh line {}: {}", line, message)
            }
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// One polygon of the mesh.
///
/// Holds two index lists of equal length, one into the vertex positions and
/// one into the texture coordinates, in the order the corners were written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Face {
    vertices: Vec<usize>,
    tex_coords: Vec<usize>,
}

impl Face {
    pub fn new(vertices: Vec<usize>, tex_coords: Vec<usize>) -> Self {
        debug_assert_eq!(vertices.len(), tex_coords.len());
        Self {
            vertices,
            tex_coords,
        }
    }

    pub fn vertex_indices(&self) -> &[usize] {
        &self.vertices
    }

    pub fn tex_coord_indices(&self) -> &[usize] {
        &self.tex_coords
    }

    /// Number of corners.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// A mesh: vertex positions, texture coordinates and faces indexing both.
///
/// Built once and read-only afterwards. Accessors return `Option` so callers
/// can reject out-of-range indices instead of reading past the arrays.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    vertices: Vec<Vec3>,
    tex_coords: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Model {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a model, degrading to an empty model on failure.
    ///
    /// The failure is logged; callers must not assume the result has faces.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_obj(path) {
            Ok(model) => {
                log::info!(
                    "Loaded model {} (v# {} vt# {} f# {})",
                    path.display(),
                    model.nverts(),
                    model.ntex_coords(),
                    model.nfaces()
                );
                model
            }
            Err(err) => {
                log::error!("Failed to load model {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Load a model from a file.
    pub fn from_obj(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    /// Parse a model from any reader.
    ///
    /// Lines are read as raw bytes; invalid UTF-8 is replaced rather than
    /// rejected, so an exporter's Latin-1 comment does not sink the mesh.
    pub fn from_reader<R: Read>(input: R) -> Result<Self, LoadError> {
        let mut reader = BufReader::new(input);
        let mut model = Self::default();
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;

            let text = String::from_utf8_lossy(&buf);
            let line = text.trim_end_matches(['\n', '\r']);

            if let Some(rest) = line.strip_prefix(VERTEX_PREFIX) {
                model.vertices.push(parse_vec3(line_number, rest));
            } else if let Some(rest) = line.strip_prefix(TEX_COORD_PREFIX) {
                model.tex_coords.push(parse_vec3(line_number, rest));
            } else if let Some(rest) = line.strip_prefix(FACE_PREFIX) {
                model.faces.push(parse_face(line_number, rest)?);
            }
        }

        Ok(model)
    }

    pub fn nverts(&self) -> usize {
        self.vertices.len()
    }

    pub fn ntex_coords(&self) -> usize {
        self.tex_coords.len()
    }

    pub fn nfaces(&self) -> usize {
        self.faces.len()
    }

    /// True when the model has no faces to draw.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn vert(&self, index: usize) -> Option<Vec3> {
        self.vertices.get(index).copied()
    }

    pub fn tex_coord(&self, index: usize) -> Option<Vec3> {
        self.tex_coords.get(index).copied()
    }

    pub fn face(&self, index: usize) -> Option<&Face> {
        self.faces.get(index)
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }
}

/// Reads up to three floats. Reading stops at the first field that is not a
/// number; that field and the ones after it stay 0.0.
fn parse_vec3(line_number: usize, fields: &str) -> Vec3 {
    let mut v = Vec3::ZERO;
    for (i, field) in fields.split_whitespace().take(3).enumerate() {
        match field.parse() {
            Ok(value) => v[i] = value,
            Err(_) => {
                log::warn!(
                    "mesh line {}: expected a number, found {:?}",
                    line_number,
                    field
                );
                break;
            }
        }
    }
    v
}

/// Reads `v/t/n` corners until the first token that is not a full triplet.
fn parse_face(line_number: usize, corners: &str) -> Result<Face, LoadError> {
    let mut vertices = Vec::with_capacity(3);
    let mut tex_coords = Vec::with_capacity(3);

    for token in corners.split_whitespace() {
        let Some((v, t)) = parse_corner(token) else {
            break;
        };
        vertices.push(to_zero_based(line_number, v)?);
        tex_coords.push(to_zero_based(line_number, t)?);
    }

    Ok(Face::new(vertices, tex_coords))
}

fn parse_corner(token: &str) -> Option<(usize, usize)> {
    let mut fields = token.split('/');
    let v = fields.next()?.parse().ok()?;
    let t = fields.next()?.parse().ok()?;
    // normal index: must be present, value unused
    let _: usize = fields.next()?.parse().ok()?;
    Some((v, t))
}

fn to_zero_based(line_number: usize, index: usize) -> Result<usize, LoadError> {
    index.checked_sub(1).ok_or_else(|| LoadError::Parse {
        line: line_number,
        message: "face indices start at 1".to_string(),
    })
}
