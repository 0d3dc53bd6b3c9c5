use rayon::ThreadPoolBuildError;
use thiserror::Error;

use crate::core::fractals::mandelbrot::palette::PaletteError;

#[derive(Debug, Error)]
pub enum ZoomConfigError {
    #[error("convergence rate must lie strictly between 0 and 1, got {rate}")]
    InvalidConvergenceRate { rate: f64 },
    #[error("attractor must be finite, got ({real}, {imag})")]
    NonFiniteAttractor { real: f64, imag: f64 },
    #[error("initial iteration budget must be greater than zero")]
    ZeroIterations,
    #[error("iteration step must be greater than zero")]
    ZeroIterationStep,
    #[error("frame interval must be greater than zero")]
    ZeroFrameInterval,
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error("failed to start render workers: {0}")]
    ThreadPool(#[from] ThreadPoolBuildError),
}
