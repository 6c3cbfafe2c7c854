//! Rendering primitives: the depth-buffered canvas, the triangle rasterizer
//! and the line drawer.

pub mod framebuffer;
pub mod line;
pub mod rasterizer;

pub use framebuffer::FrameBuffer;
pub use line::{draw_line, draw_triangle_wireframe};
pub use rasterizer::{
    BarycentricRasterizer, PixelShader, SolidShader, TextureShader, Triangle,
};
