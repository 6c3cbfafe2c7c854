use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use texrast::config::DEFAULT_MESH_PATH;
use texrast::{Engine, Model, RenderConfig};

/// Render a textured mesh to output.tga.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Mesh description file
    #[arg(default_value = DEFAULT_MESH_PATH)]
    mesh: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let model = Model::load(&args.mesh);
    let engine = Engine::new(RenderConfig::default());
    let stats = engine
        .render_to_file(&model)
        .with_context(|| format!("rendering {}", args.mesh.display()))?;

    log::debug!("{:?}", stats);
    Ok(())
}
