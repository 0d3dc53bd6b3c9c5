use crate::core::actions::render_frame::ports::pixel_algorithm::PixelAlgorithm;
use crate::core::data::colour::Colour;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::escape::EscapeEvaluator;

/// Sub-pixel offsets, as multiples of one pixel step, on each axis.
const SUBSAMPLE_OFFSETS: [i32; 3] = [-1, 0, 1];
const SUBSAMPLE_SCALE: f64 = 0.25;
const SUBSAMPLE_COUNT: u32 = 9;

/// 3×3 anti-aliased sampling of one frame's viewport.
///
/// Built per render call from a read-only snapshot of the viewport and
/// iteration budget.
#[derive(Debug)]
pub struct Supersampler<'a> {
    evaluator: &'a EscapeEvaluator,
    viewport: Viewport,
    max_iterations: u32,
    step_x: f64,
    step_y: f64,
}

impl<'a> Supersampler<'a> {
    #[must_use]
    pub fn new(
        evaluator: &'a EscapeEvaluator,
        viewport: Viewport,
        max_iterations: u32,
        size: FrameSize,
    ) -> Self {
        let (step_x, step_y) = viewport.pixel_steps(size);

        Self {
            evaluator,
            viewport,
            max_iterations,
            step_x,
            step_y,
        }
    }

    /// Averages nine samples around the pixel's plane coordinate.
    #[must_use]
    pub fn sample_pixel(&self, row: u32, col: u32) -> Colour {
        let a = self.viewport.min_y() + f64::from(row) * self.step_y;
        let b = self.viewport.min_x() + f64::from(col) * self.step_x;

        let mut samples = [Colour::BLACK; SUBSAMPLE_COUNT as usize];
        let offsets = SUBSAMPLE_OFFSETS
            .iter()
            .flat_map(|&j| SUBSAMPLE_OFFSETS.iter().map(move |&i| (j, i)));

        for (sample, (j, i)) in samples.iter_mut().zip(offsets) {
            *sample = self.evaluator.colour_at(
                a + f64::from(j) * self.step_y * SUBSAMPLE_SCALE,
                b + f64::from(i) * self.step_x * SUBSAMPLE_SCALE,
                self.max_iterations,
            );
        }

        average(&samples)
    }
}

impl PixelAlgorithm for Supersampler<'_> {
    fn compute(&self, pixel: Point) -> u32 {
        self.sample_pixel(pixel.y, pixel.x).to_argb()
    }
}

/// Per-channel mean with truncating division.
pub(crate) fn average(samples: &[Colour; SUBSAMPLE_COUNT as usize]) -> Colour {
    let (r, g, b) = samples.iter().fold((0_u32, 0_u32, 0_u32), |(r, g, b), c| {
        (r + u32::from(c.r), g + u32::from(c.g), b + u32::from(c.b))
    });

    Colour {
        r: (r / SUBSAMPLE_COUNT) as u8,
        g: (g / SUBSAMPLE_COUNT) as u8,
        b: (b / SUBSAMPLE_COUNT) as u8,
    }
}
