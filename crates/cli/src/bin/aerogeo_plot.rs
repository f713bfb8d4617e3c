use std::path::PathBuf;

use aerogeo::config::load_surfaces;
use aerogeo::constants::DEFAULT_OUTPUT_DIR;
use aerogeo::ids::global_ids;
use aerogeo::manifest::build_surfaces;
use aerogeo::plot::{PlotOptions, render_planform};
use aerogeo::surface::Discretizer;
use anyhow::Context;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render planform outlines for every surface in a manifest")]
struct Cli {
    /// YAML or TOML manifest (or a directory of TOML files)
    #[arg(long)]
    manifest: PathBuf,

    /// Directory receiving one PNG per surface
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Samples along each edge contour
    #[arg(long, default_value_t = 200)]
    samples: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    let cli = Cli::parse();

    let configs = load_surfaces(&cli.manifest)
        .with_context(|| format!("loading {}", cli.manifest.display()))?;
    let surfaces = build_surfaces(&configs, &Discretizer::default(), global_ids())?;
    let options = PlotOptions {
        width: cli.width,
        height: cli.height,
        samples: cli.samples,
    };

    for (surface, _) in &surfaces {
        let path = cli.output_dir.join(format!("{}.png", surface.name()));
        render_planform(surface, &path, &options)
            .with_context(|| format!("rendering {}", path.display()))?;
        println!("{} -> {}", surface.name(), path.display());
    }
    Ok(())
}
