//! Fixed render parameters.
//!
//! The canvas size is a build-time constant and is also the size of the
//! blank texture substituted when the texture file cannot be read.

use std::path::PathBuf;

pub const WIDTH: u32 = 1024;
pub const HEIGHT: u32 = 1024;

pub const DEFAULT_MESH_PATH: &str = "obj/african_head/african_head.obj";
pub const DEFAULT_TEXTURE_PATH: &str = "obj/african_head/african_head_diffuse.tga";
pub const DEFAULT_OUTPUT_PATH: &str = "output.tga";

/// Everything the engine needs besides the model.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub texture_path: PathBuf,
    pub output_path: PathBuf,
    /// Draw triangle outlines over the filled image.
    pub wireframe: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            texture_path: PathBuf::from(DEFAULT_TEXTURE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            wireframe: false,
        }
    }
}
