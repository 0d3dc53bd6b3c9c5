use std::num::NonZeroUsize;
use std::time::Duration;

use clap::Parser;

use fractal_zoom::{DEFAULT_HEIGHT, DEFAULT_WIDTH, FrameSize, ZoomConfig};

/// Shows the Mandelbrot zoom in a window.
#[derive(Debug, Parser)]
#[command(name = "gui", version)]
struct Args {
    #[arg(
        long,
        default_value_t = DEFAULT_WIDTH,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    width: u32,

    #[arg(
        long,
        default_value_t = DEFAULT_HEIGHT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    height: u32,

    /// Row worker threads; defaults to one per core.
    #[arg(long)]
    threads: Option<NonZeroUsize>,

    /// Target frames per second.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,
}

fn main() -> anyhow::Result<()> {
    fractal_zoom::init_logging();

    let args = Args::parse();
    let config = ZoomConfig {
        frame_size: FrameSize::new(args.width, args.height)?,
        worker_threads: args.threads,
        frame_interval: Duration::from_secs(1) / args.fps,
        ..ZoomConfig::default()
    };

    fractal_zoom::run_gui(config)
}
