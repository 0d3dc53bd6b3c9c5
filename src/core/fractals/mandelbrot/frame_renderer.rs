use std::num::NonZeroUsize;

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use crate::core::actions::render_frame::render_frame::{RenderError, render_frame_parallel};
use crate::core::data::frame_size::FrameSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::escape::EscapeEvaluator;
use crate::core::fractals::mandelbrot::supersampler::Supersampler;

/// Renders supersampled Mandelbrot frames of a fixed size on a dedicated
/// worker pool.
///
/// Holds no per-frame state: every call takes the viewport and iteration
/// budget as a snapshot and writes into a caller-owned buffer.
pub struct FrameRenderer {
    size: FrameSize,
    evaluator: EscapeEvaluator,
    pool: ThreadPool,
}

impl FrameRenderer {
    /// Builds a renderer with `threads` workers, or one per available core.
    pub fn new(
        size: FrameSize,
        evaluator: EscapeEvaluator,
        threads: Option<NonZeroUsize>,
    ) -> Result<Self, ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads.map_or(0, NonZeroUsize::get))
            .thread_name(|index| format!("fractal-row-{index}"))
            .build()?;

        Ok(Self {
            size,
            evaluator,
            pool,
        })
    }

    #[must_use]
    pub fn size(&self) -> FrameSize {
        self.size
    }

    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Fills `destination` with one complete frame. Blocks until every row
    /// is done.
    pub fn render(
        &self,
        viewport: &Viewport,
        max_iterations: u32,
        destination: &mut [u32],
    ) -> Result<(), RenderError> {
        let sampler = Supersampler::new(&self.evaluator, *viewport, max_iterations, self.size);

        self.pool
            .install(|| render_frame_parallel(self.size, &sampler, destination))
    }
}

impl std::fmt::Debug for FrameRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameRenderer")
            .field("size", &self.size)
            .field("workers", &self.pool.current_num_threads())
            .finish_non_exhaustive()
    }
}
