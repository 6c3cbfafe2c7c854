//! A CPU-based software rasterizer for textured meshes.
//!
//! Loads a mesh description, projects it orthographically onto a fixed-size
//! canvas, fills every triangle with depth testing and nearest-neighbour
//! texture sampling, and writes the result as a TGA image.
//!
//! # Quick Start
//!
//! ```ignore
//! use texrast::prelude::*;
//!
//! let model = Model::load("obj/african_head/african_head.obj");
//! let engine = Engine::new(RenderConfig::default());
//! engine.render_to_file(&model)?;
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod config;
pub mod engine;
pub mod math;
pub mod model;
pub mod projection;
pub mod render;
pub mod texture;

// Re-export commonly needed types at crate root for convenience
pub use config::RenderConfig;
pub use engine::{Engine, RenderError, RenderStats};
pub use model::{Face, LoadError, Model};
pub use projection::Viewport;
pub use texture::Texture;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use texrast::prelude::*;
/// ```
pub mod prelude {
    // Config
    pub use crate::config::{RenderConfig, HEIGHT, WIDTH};

    // Engine
    pub use crate::engine::{Engine, RenderError, RenderStats};

    // Model
    pub use crate::model::{Face, LoadError, Model};

    // Projection
    pub use crate::projection::Viewport;

    // Texture
    pub use crate::texture::Texture;

    // Math
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Rendering
    pub use crate::render::{BarycentricRasterizer, FrameBuffer, PixelShader, Triangle};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{
        BarycentricRasterizer, FrameBuffer, PixelShader, SolidShader, TextureShader,
    };
}
