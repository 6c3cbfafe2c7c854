//! Pixel shaders for triangle rasterization.
//!
//! The rasterizer handles coverage and the depth test; a shader turns the
//! barycentric weights of a covered, depth-passing pixel into a color.

use image::Rgb;

use crate::math::vec3::Vec3;
use crate::texture::Texture;

/// Trait for per-pixel shading computations.
///
/// `weights` are the barycentric coordinates (w0, w1, w2) of the pixel with
/// respect to the triangle's corners A, B, C. They sum to 1 and any
/// per-corner attribute interpolates as `w0*a0 + w1*a1 + w2*a2`.
pub trait PixelShader {
    fn shade(&self, weights: Vec3) -> Rgb<u8>;
}

/// Constant color for every pixel.
pub struct SolidShader {
    color: Rgb<u8>,
}

impl SolidShader {
    pub fn new(color: Rgb<u8>) -> Self {
        Self { color }
    }
}

impl PixelShader for SolidShader {
    #[inline]
    fn shade(&self, _weights: Vec3) -> Rgb<u8> {
        self.color
    }
}

/// Texture shader - samples texture at interpolated UV coordinates.
///
/// `uvs` must be aligned corner-for-corner with the screen points handed to
/// the rasterizer. Only x (u) and y (v) of each entry are used.
pub struct TextureShader<'a> {
    texture: &'a Texture,
    uvs: [Vec3; 3],
}

impl<'a> TextureShader<'a> {
    pub fn new(texture: &'a Texture, uvs: [Vec3; 3]) -> Self {
        Self { texture, uvs }
    }

    /// Interpolate UV coordinates using barycentric weights
    #[inline]
    fn interpolate_uv(&self, weights: Vec3) -> (f32, f32) {
        let mut u = 0.0;
        let mut v = 0.0;
        for i in 0..3 {
            u += self.uvs[i].x * weights[i];
            v += self.uvs[i].y * weights[i];
        }
        (u, v)
    }
}

impl PixelShader for TextureShader<'_> {
    #[inline]
    fn shade(&self, weights: Vec3) -> Rgb<u8> {
        let (u, v) = self.interpolate_uv(weights);
        self.texture.sample(u, v)
    }
}
