use std::num::NonZeroUsize;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use fractal_zoom::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, FrameSize, HeadlessController, HeadlessReport, ZoomConfig,
};

/// Renders the Mandelbrot zoom without a window and reports frame timings.
#[derive(Debug, Parser)]
#[command(name = "fractal_zoom", version)]
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

    /// Number of zoom steps to render.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Row worker threads; defaults to one per core.
    #[arg(long)]
    threads: Option<NonZeroUsize>,
}

fn run(args: &Args) -> anyhow::Result<HeadlessReport> {
    let config = ZoomConfig {
        frame_size: FrameSize::new(args.width, args.height)?,
        worker_threads: args.threads,
        ..ZoomConfig::default()
    };

    let mut controller =
        HeadlessController::from_config(&config).context("invalid zoom configuration")?;
    let report = controller.run(args.frames)?;

    if let Some(last) = report.last() {
        info!(
            frame = last.frame_number,
            iterations = last.max_iterations,
            real_min = last.viewport.min_x(),
            real_max = last.viewport.max_x(),
            imag_min = last.viewport.min_y(),
            imag_max = last.viewport.max_y(),
            "final view"
        );
    }

    if let (Some(mean), Some(slowest)) = (report.mean_render_duration(), report.slowest()) {
        info!(
            mean_ms = mean.as_secs_f64() * 1000.0,
            slowest_ms = slowest.render_duration.as_secs_f64() * 1000.0,
            slowest_frame = slowest.frame_number,
            "frame timings"
        );
    }

    Ok(report)
}

fn main() -> anyhow::Result<()> {
    fractal_zoom::init_logging();

    let args = Args::parse();
    run(&args)?;

    Ok(())
}
