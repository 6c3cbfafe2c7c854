//! Small geometry primitives used by the projection and rasterizer.

pub mod vec2;
pub mod vec3;
