//! Named colors used by the renderer.

use image::Rgb;

/// Background of a fresh canvas, and the color returned for texture samples
/// that fall outside the texture.
pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const RED: Rgb<u8> = Rgb([255, 0, 0]);
