use std::path::Path;

use image::imageops;
use image::{Rgb, RgbImage};

use crate::colors;

/// Represents a 2D texture for texture mapping.
///
/// Stored bottom-left origin: images are flipped vertically on load so that
/// v = 0 addresses the bottom row of the file.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    image: RgbImage,
}

impl Texture {
    /// Load a texture from an image file (TGA) and flip it vertically.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, image::ImageError> {
        let mut image = image::open(path)?.to_rgb8();
        imageops::flip_vertical_in_place(&mut image);
        Ok(Self { image })
    }

    /// Load a texture, falling back to a blank `width` x `height` texture.
    ///
    /// The failure is logged; rendering continues with black samples.
    pub fn load_or_blank<P: AsRef<Path>>(path: P, width: u32, height: u32) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(texture) => {
                log::info!(
                    "Loaded texture {} ({}x{})",
                    path.display(),
                    texture.width(),
                    texture.height()
                );
                texture
            }
            Err(err) => {
                log::error!("Failed to load texture {}: {}", path.display(), err);
                Self::blank(width, height)
            }
        }
    }

    /// Wrap an image that is already in bottom-left-origin order.
    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn blank(width: u32, height: u32) -> Self {
        Self::solid(width, height, colors::BACKGROUND)
    }

    pub fn solid(width: u32, height: u32, color: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, color),
        }
    }

    /// Sample the texture at UV coordinates using nearest-neighbor filtering.
    ///
    /// The pixel is `(u * width, v * height)` truncated toward zero. There is
    /// no wrapping or clamping: a sample that lands outside the texture
    /// returns [`colors::BACKGROUND`].
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> Rgb<u8> {
        let x = (u * self.width() as f32) as i64;
        let y = (v * self.height() as f32) as i64;
        match (u32::try_from(x), u32::try_from(y)) {
            (Ok(x), Ok(y)) => self
                .image
                .get_pixel_checked(x, y)
                .copied()
                .unwrap_or(colors::BACKGROUND),
            _ => colors::BACKGROUND,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> Texture {
        // 2x2: bottom row red/white, top row white/red
        let mut image = RgbImage::new(2, 2);
        image.put_pixel(0, 0, colors::RED);
        image.put_pixel(1, 0, colors::WHITE);
        image.put_pixel(0, 1, colors::WHITE);
        image.put_pixel(1, 1, colors::RED);
        Texture::from_image(image)
    }

    #[test]
    fn samples_nearest_pixel() {
        let tex = checker();
        assert_eq!(tex.sample(0.1, 0.1), colors::RED);
        assert_eq!(tex.sample(0.6, 0.1), colors::WHITE);
        assert_eq!(tex.sample(0.1, 0.9), colors::WHITE);
        assert_eq!(tex.sample(0.99, 0.99), colors::RED);
    }

    #[test]
    fn small_negative_truncates_toward_zero() {
        let tex = checker();
        // -0.4 * 2 = -0.8 truncates to 0
        assert_eq!(tex.sample(-0.4, 0.0), colors::RED);
    }

    #[test]
    fn out_of_range_samples_background() {
        let tex = Texture::solid(4, 4, colors::WHITE);
        assert_eq!(tex.sample(1.0, 0.5), colors::BACKGROUND);
        assert_eq!(tex.sample(0.5, 1.0), colors::BACKGROUND);
        assert_eq!(tex.sample(-1.0, 0.5), colors::BACKGROUND);
        assert_eq!(tex.sample(0.5, 7.0), colors::BACKGROUND);
    }

    #[test]
    fn missing_file_gives_blank_texture() {
        let tex = Texture::load_or_blank("does/not/exist.tga", 8, 4);
        assert_eq!((tex.width(), tex.height()), (8, 4));
        assert_eq!(tex.sample(0.5, 0.5), colors::BACKGROUND);
        assert!(Texture::from_file("does/not/exist.tga").is_err());
    }
}
