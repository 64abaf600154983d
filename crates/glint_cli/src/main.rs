mod cli;

use anyhow::Context;
use clap::Parser;
use glint_renderer::{render, render_parallel, RenderConfig, Scene};

use cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    let desc = glint_core::load_scene(&args.scene)
        .with_context(|| format!("failed to load scene {}", args.scene.display()))?;
    let scene = Scene::from_description(&desc)
        .with_context(|| format!("invalid scene {}", args.scene.display()))?;

    let config = RenderConfig::default()
        .with_resolution(args.width, args.height)
        .with_max_depth(args.depth)
        .with_sampling(args.sampling.into(), args.seed)
        .with_bucket_size(args.bucket_size);

    let image = if args.serial {
        render(&scene, &config)
    } else {
        render_parallel(&scene, &config)
    }
    .context("render failed")?;

    image
        .to_rgb_image()
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    log::info!("Saved {}", args.output.display());

    Ok(())
}
