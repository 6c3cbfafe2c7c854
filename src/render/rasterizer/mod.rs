//! Triangle rasterization.
//!
//! [`BarycentricRasterizer`] owns coverage, clipping to the canvas and the
//! depth test. Color comes from a [`PixelShader`]; the render path uses
//! [`TextureShader`].

mod barycentric;
mod shader;

pub use barycentric::{BarycentricRasterizer, DEGENERATE_EPSILON, DEGENERATE_WEIGHTS};
pub use shader::{PixelShader, SolidShader, TextureShader};

use crate::math::vec3::Vec3;

/// A triangle ready for rasterization in screen space.
///
/// `points` carry pixel x/y and a depth key in z. `uvs` are the matching
/// texture coordinates, corner for corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec3; 3],
    pub uvs: [Vec3; 3],
}

impl Triangle {
    pub fn new(points: [Vec3; 3], uvs: [Vec3; 3]) -> Self {
        Self { points, uvs }
    }
}
