//! Bounding-box triangle rasterization with barycentric coverage.
//!
//! # Algorithm Overview
//!
//! 1. Compute the triangle's bounding box and clamp it to the canvas
//! 2. For each pixel in the box, compute barycentric weights
//! 3. The pixel is covered if no weight is negative (edges are inclusive)
//! 4. Interpolate depth and keep the pixel only if it is nearer than the
//!    depth buffer, then ask the shader for a color
//!
//! # Barycentric Coordinates
//!
//! A point P in triangle ABC can be written as
//!
//! ```text
//! P = (1 - u - v) A + u B + v C
//! ```
//!
//! so `u AB + v AC + PA = 0`. Taken per axis this says the vector
//! `(v, u, 1)` is perpendicular to both `(ACx, ABx, PAx)` and
//! `(ACy, ABy, PAy)`, and the cross product of those two gives it up to
//! scale. The z component of that cross product is twice the signed area
//! of the triangle; when it is (near) zero the triangle is degenerate.

use super::shader::PixelShader;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::render::framebuffer::FrameBuffer;

/// Threshold on the cross product's z below which a triangle counts as
/// degenerate. Coordinates are whole pixels, so a real triangle has |z| >= 1.
pub const DEGENERATE_EPSILON: f32 = 1e-2;

/// Weights returned for a degenerate triangle. The negative component makes
/// every pixel fail the coverage test.
pub const DEGENERATE_WEIGHTS: Vec3 = Vec3::new(-1.0, 1.0, 1.0);

#[derive(Debug, Clone, Copy, Default)]
pub struct BarycentricRasterizer;

impl BarycentricRasterizer {
    pub fn new() -> Self {
        BarycentricRasterizer
    }

    /// Barycentric weights of `p` with respect to corners `a`, `b`, `c`.
    ///
    /// Only x and y are used. Returns (wA, wB, wC), or
    /// [`DEGENERATE_WEIGHTS`] when the triangle has no area.
    #[inline]
    pub fn barycentric(a: Vec3, b: Vec3, c: Vec3, p: Vec3) -> Vec3 {
        let s0 = Vec3::new(c.x - a.x, b.x - a.x, a.x - p.x);
        let s1 = Vec3::new(c.y - a.y, b.y - a.y, a.y - p.y);
        let u = s0.cross(s1);

        if u.z.abs() > DEGENERATE_EPSILON {
            Vec3::new(1.0 - (u.x + u.y) / u.z, u.y / u.z, u.x / u.z)
        } else {
            DEGENERATE_WEIGHTS
        }
    }

    #[inline]
    fn covers(weights: Vec3) -> bool {
        !(weights.x < 0.0 || weights.y < 0.0 || weights.z < 0.0)
    }

    /// Inclusive pixel range covered by the triangle's bounding box after
    /// clamping to the canvas, or None if nothing of it is on the canvas.
    fn clamped_bounds(points: &[Vec3; 3], width: u32, height: u32) -> Option<(Vec2, Vec2)> {
        if width == 0 || height == 0 {
            return None;
        }
        let clamp = Vec2::new((width - 1) as f32, (height - 1) as f32);
        let mut bbox_min = Vec2::new(f32::MAX, f32::MAX);
        let mut bbox_max = Vec2::new(-f32::MAX, -f32::MAX);
        for p in points {
            bbox_min = bbox_min.min(Vec2::new(p.x, p.y));
            bbox_max = bbox_max.max(Vec2::new(p.x, p.y));
        }
        let bbox_min = bbox_min.max(Vec2::ZERO);
        let bbox_max = bbox_max.min(clamp);

        let min = Vec2::new(bbox_min.x.ceil(), bbox_min.y.ceil());
        let max = Vec2::new(bbox_max.x.floor(), bbox_max.y.floor());
        if min.x > max.x || min.y > max.y {
            return None;
        }
        Some((min, max))
    }

    /// Fill a triangle given in screen space.
    ///
    /// `points` hold pixel x and y plus a depth in z; larger z is nearer.
    /// Each covered pixel whose interpolated depth beats the depth buffer has
    /// its depth stored and its color taken from `shader`. Returns the number
    /// of pixels written.
    pub fn fill_triangle<S: PixelShader>(
        &self,
        points: &[Vec3; 3],
        buffer: &mut FrameBuffer,
        shader: &S,
    ) -> usize {
        let Some((min, max)) = Self::clamped_bounds(points, buffer.width(), buffer.height())
        else {
            return 0;
        };
        let [a, b, c] = *points;
        let mut painted = 0;

        for y in min.y as u32..=max.y as u32 {
            for x in min.x as u32..=max.x as u32 {
                let p = Vec3::new(x as f32, y as f32, 0.0);
                let weights = Self::barycentric(a, b, c, p);
                if !Self::covers(weights) {
                    continue;
                }

                let depth = Vec3::new(a.z, b.z, c.z).dot(weights);
                if !buffer.test_and_set_depth(x, y, depth) {
                    continue;
                }

                buffer.set_pixel(x, y, shader.shade(weights));
                painted += 1;
            }
        }

        painted
    }
}
