//! Line drawing for wireframe overlays.

use image::{Rgb, RgbImage};

use crate::math::vec3::Vec3;

/// Draws a line between two pixels, endpoints included.
///
/// Steep lines are drawn with x and y transposed so the loop always runs
/// along the longer axis, one pixel per step. The minor coordinate is
/// interpolated with `t` in [0, 1] and truncated. Pixels outside the image
/// are skipped.
pub fn draw_line(
    mut x0: i32,
    mut y0: i32,
    mut x1: i32,
    mut y1: i32,
    image: &mut RgbImage,
    color: Rgb<u8>,
) {
    let mut steep = false;
    if (x0 - x1).abs() < (y0 - y1).abs() {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
        steep = true;
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    for x in x0..=x1 {
        let t = if x1 == x0 {
            0.0
        } else {
            (x - x0) as f32 / (x1 - x0) as f32
        };
        let y = (y0 as f32 * (1.0 - t) + y1 as f32 * t) as i32;
        if steep {
            put_pixel_clipped(image, y, x, color);
        } else {
            put_pixel_clipped(image, x, y, color);
        }
    }
}

/// Outline of a screen-space triangle. Depth is ignored.
pub fn draw_triangle_wireframe(points: &[Vec3; 3], image: &mut RgbImage, color: Rgb<u8>) {
    for i in 0..3 {
        let from = points[i];
        let to = points[(i + 1) % 3];
        draw_line(
            from.x as i32,
            from.y as i32,
            to.x as i32,
            to.y as i32,
            image,
            color,
        );
    }
}

#[inline]
fn put_pixel_clipped(image: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
        if x < image.width() && y < image.height() {
            image.put_pixel(x, y, color);
        }
    }
}
