//! Output image and depth buffer, owned together for the length of a render.
//!
//! The depth buffer starts at negative infinity so any incoming depth wins.
//! Larger depth values are nearer to the viewer.

use image::{Rgb, RgbImage};

pub struct FrameBuffer {
    color: RgbImage,
    depth: Vec<f32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Allocate a black canvas with an empty depth buffer.
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            color: RgbImage::new(width, height),
            depth: vec![f32::NEG_INFINITY; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.width as usize
    }

    /// Depth test at (x, y).
    ///
    /// Stores `depth` and returns true only if it is strictly greater than the
    /// value already there. Callers must pass in-bounds coordinates.
    #[inline]
    pub fn test_and_set_depth(&mut self, x: u32, y: u32, depth: f32) -> bool {
        let idx = self.index(x, y);
        if depth > self.depth[idx] {
            self.depth[idx] = depth;
            true
        } else {
            false
        }
    }

    /// Get the depth at (x, y), or None if out of bounds.
    pub fn depth_at(&self, x: u32, y: u32) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.depth[self.index(x, y)])
        } else {
            None
        }
    }

    /// Set a pixel without depth testing. Silently ignores out-of-bounds
    /// coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb<u8>) {
        if x < self.width && y < self.height {
            self.color.put_pixel(x, y, color);
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        self.color.get_pixel_checked(x, y).copied()
    }

    pub fn depth_buffer(&self) -> &[f32] {
        &self.depth
    }

    pub fn image(&self) -> &RgbImage {
        &self.color
    }

    pub fn image_mut(&mut self) -> &mut RgbImage {
        &mut self.color
    }

    /// Consume the buffer, dropping the depth values.
    pub fn into_image(self) -> RgbImage {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;

    #[test]
    fn starts_blank_and_infinitely_far() {
        let fb = FrameBuffer::new(4, 3);
        assert_eq!(fb.depth_buffer().len(), 12);
        assert!(fb.depth_buffer().iter().all(|d| *d == f32::NEG_INFINITY));
        assert_eq!(fb.get_pixel(3, 2), Some(colors::BACKGROUND));
        assert_eq!(fb.get_pixel(4, 0), None);
    }

    #[test]
    fn depth_test_is_strict() {
        let mut fb = FrameBuffer::new(2, 2);
        assert!(fb.test_and_set_depth(1, 1, -5.0));
        assert!(!fb.test_and_set_depth(1, 1, -5.0));
        assert!(!fb.test_and_set_depth(1, 1, -6.0));
        assert!(fb.test_and_set_depth(1, 1, 0.5));
        assert_eq!(fb.depth_at(1, 1), Some(0.5));
        // row-major: (1, 1) is index 3
        assert_eq!(fb.depth_buffer()[3], 0.5);
        assert_eq!(fb.depth_at(0, 1), Some(f32::NEG_INFINITY));
    }

    #[test]
    fn set_pixel_ignores_out_of_bounds() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set_pixel(5, 5, colors::RED);
        fb.set_pixel(0, 1, colors::RED);
        assert_eq!(fb.get_pixel(0, 1), Some(colors::RED));
        assert_eq!(fb.into_image().get_pixel(1, 1), &colors::BACKGROUND);
    }
}
