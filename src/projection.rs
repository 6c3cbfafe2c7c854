//! Orthographic mapping from normalized object space to screen space.
//!
//! There is no camera: x and y in [-1, 1] are stretched over the canvas and z
//! is carried through untouched as a relative depth key for the z-buffer.

use crate::math::vec3::Vec3;

/// Canvas dimensions used to place normalized coordinates on pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Maps a normalized position to a pixel, keeping z.
    ///
    /// `pixel = floor((coord + 1) * dimension / 2 + 0.5)`, so -1 lands on 0
    /// and +1 lands on `dimension`, one past the last pixel. Inputs outside
    /// [-1, 1] produce off-canvas pixels that the rasterizer clips.
    pub fn project(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            Self::to_pixel(v.x, self.width),
            Self::to_pixel(v.y, self.height),
            v.z,
        )
    }

    #[inline]
    fn to_pixel(coord: f32, dimension: u32) -> f32 {
        ((coord + 1.0) * dimension as f32 / 2.0 + 0.5).floor()
    }
}
