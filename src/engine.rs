//! Batch render driver.
//!
//! The [`Engine`] turns a [`Model`] and a [`Texture`] into an image: every
//! face is projected onto the canvas, filled through the depth-tested
//! rasterizer with texture sampling, and the result is flipped so the saved
//! file has its origin at the bottom-left.

use std::fmt;
use std::path::Path;

use image::{imageops, ImageFormat, RgbImage};

use crate::colors;
use crate::config::RenderConfig;
use crate::math::vec3::Vec3;
use crate::model::{Face, Model};
use crate::projection::Viewport;
use crate::render::{
    draw_triangle_wireframe, BarycentricRasterizer, FrameBuffer, TextureShader, Triangle,
};
use crate::texture::Texture;

/// Errors that stop a render.
#[derive(Debug)]
pub enum RenderError {
    /// A face refers to a vertex position the model does not have.
    VertexIndex { face: usize, index: usize },
    /// A face refers to a texture coordinate the model does not have.
    TexCoordIndex { face: usize, index: usize },
    /// A face has fewer than three corners.
    FaceArity { face: usize, corners: usize },
    /// The output image could not be written.
    Image(image::ImageError),
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Image(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::VertexIndex { face, index } => {
                write!(f, "face {} references missing vertex {}", face, index)
            }
            RenderError::TexCoordIndex { face, index } => write!(
                f,
                "face {} references missing texture coordinate {}",
                face, index
            ),
            RenderError::FaceArity { face, corners } => write!(
                f,
                "face {} has {} corners, at least 3 are required",
                face, corners
            ),
            RenderError::Image(err) => write!(f, "image error: {}", err),
        }
    }
}

impl From<image::ImageError> for RenderError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}

/// Counters reported by a render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Triangles handed to the rasterizer.
    pub triangles: usize,
    /// Pixel writes that passed coverage and the depth test.
    pub pixels: usize,
    /// Faces with more than three corners, drawn from their first three.
    pub polygons_truncated: usize,
}

pub struct Engine {
    config: RenderConfig,
    viewport: Viewport,
    rasterizer: BarycentricRasterizer,
}

impl Engine {
    pub fn new(config: RenderConfig) -> Self {
        let viewport = Viewport::new(config.width, config.height);
        Self {
            config,
            viewport,
            rasterizer: BarycentricRasterizer::new(),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Build the screen-space triangle for one face.
    ///
    /// Indices are checked against the model; a face with more than three
    /// corners contributes its first three.
    pub fn triangle_for_face(
        &self,
        model: &Model,
        face_index: usize,
        face: &Face,
    ) -> Result<Triangle, RenderError> {
        if face.len() < 3 {
            return Err(RenderError::FaceArity {
                face: face_index,
                corners: face.len(),
            });
        }

        let mut points = [Vec3::ZERO; 3];
        let mut uvs = [Vec3::ZERO; 3];
        for corner in 0..3 {
            let vi = face.vertex_indices()[corner];
            let vertex = model.vert(vi).ok_or(RenderError::VertexIndex {
                face: face_index,
                index: vi,
            })?;
            points[corner] = self.viewport.project(vertex);

            let ti = face.tex_coord_indices()[corner];
            uvs[corner] = model.tex_coord(ti).ok_or(RenderError::TexCoordIndex {
                face: face_index,
                index: ti,
            })?;
        }

        Ok(Triangle::new(points, uvs))
    }

    /// Rasterize every face of `model` into `buffer`.
    ///
    /// The buffer is left in internal (top-left origin) order.
    pub fn render_into(
        &self,
        model: &Model,
        texture: &Texture,
        buffer: &mut FrameBuffer,
    ) -> Result<RenderStats, RenderError> {
        let mut stats = RenderStats::default();

        log::info!("Rasterize start ({} faces)", model.nfaces());
        for (face_index, face) in model.faces().iter().enumerate() {
            let triangle = self.triangle_for_face(model, face_index, face)?;
            if face.len() > 3 {
                stats.polygons_truncated += 1;
            }

            let shader = TextureShader::new(texture, triangle.uvs);
            stats.pixels += self
                .rasterizer
                .fill_triangle(&triangle.points, buffer, &shader);
            stats.triangles += 1;

            if self.config.wireframe {
                draw_triangle_wireframe(&triangle.points, buffer.image_mut(), colors::WHITE);
            }
        }
        log::info!("Rasterize end");
        log::debug!(
            "{} triangles, {} pixels written",
            stats.triangles,
            stats.pixels
        );
        if stats.polygons_truncated > 0 {
            log::warn!(
                "{} faces had more than 3 corners; only their first triangle was drawn",
                stats.polygons_truncated
            );
        }

        Ok(stats)
    }

    /// Render into a fresh canvas and return it flipped to bottom-left origin.
    pub fn render(
        &self,
        model: &Model,
        texture: &Texture,
    ) -> Result<(RgbImage, RenderStats), RenderError> {
        let mut buffer = FrameBuffer::new(self.config.width, self.config.height);
        let stats = self.render_into(model, texture, &mut buffer)?;

        let mut image = buffer.into_image();
        imageops::flip_vertical_in_place(&mut image);
        Ok((image, stats))
    }

    /// Full batch run: load the configured texture (blank on failure),
    /// render, and write the configured output file as TGA.
    pub fn render_to_file(&self, model: &Model) -> Result<RenderStats, RenderError> {
        let texture = Texture::load_or_blank(
            &self.config.texture_path,
            self.config.width,
            self.config.height,
        );
        let (image, stats) = self.render(model, &texture)?;
        save_tga(&image, &self.config.output_path)?;
        Ok(stats)
    }
}

fn save_tga(image: &RgbImage, path: &Path) -> Result<(), RenderError> {
    match image.save_with_format(path, ImageFormat::Tga) {
        Ok(()) => {
            log::info!("Wrote image {}", path.display());
            Ok(())
        }
        Err(err) => {
            log::error!("Failed to write image {}: {}", path.display(), err);
            Err(err.into())
        }
    }
}
