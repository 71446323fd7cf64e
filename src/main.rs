//! `rubik` binary: opens the cube window.

use std::path::PathBuf;

use clap::Parser;
use rubik::{Options, Viewer};

/// Interactive Rubik's cube.
#[derive(Debug, Parser)]
#[command(name = "rubik", version, about)]
struct Args {
    /// TOML options preset to load.
    #[arg(long, value_name = "TOML")]
    options: Option<PathBuf>,

    /// Directory holding the WGSL shaders.
    #[arg(long, value_name = "DIR", default_value = "assets/shaders")]
    shaders: PathBuf,

    /// Frame-rate cap (0 = unlimited).
    #[arg(long)]
    fps: Option<u32>,

    /// Frames per quarter turn.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    turn_frames: Option<u32>,
}

fn load_options(args: &Args) -> Result<Options, rubik::RubikError> {
    let mut options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    if let Some(fps) = args.fps {
        options.animation.target_fps = fps;
    }
    if let Some(frames) = args.turn_frames {
        options.animation.turn_frames = frames;
    }
    Ok(options)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let options = match load_options(&args) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let viewer = Viewer::builder()
        .with_options(options)
        .with_shader_dir(args.shaders)
        .build();

    if let Err(e) = viewer.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
