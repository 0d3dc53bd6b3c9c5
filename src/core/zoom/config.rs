use std::num::NonZeroUsize;
use std::time::Duration;

use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::palette::{DEFAULT_MARKERS, Palette};
use crate::core::zoom::errors::ZoomConfigError;
use crate::core::zoom::settings::ZoomSettings;

pub const DEFAULT_WIDTH: u32 = 960;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_MAX_ITERATIONS: u32 = 32;
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub(crate) fn default_viewport() -> Viewport {
    Viewport::new(Complex::new(-2.25, -0.95), Complex::new(0.75, 0.95))
        .expect("default zoom viewport is valid")
}

/// Startup configuration of a zoom animation.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomConfig {
    pub frame_size: FrameSize,
    pub initial_viewport: Viewport,
    pub initial_iterations: u32,
    pub zoom: ZoomSettings,
    pub palette_markers: Vec<Colour>,
    /// Row workers; `None` uses one per available core.
    pub worker_threads: Option<NonZeroUsize>,
    /// Target time between the starts of consecutive frames.
    pub frame_interval: Duration,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            frame_size: FrameSize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
                .expect("default frame size is valid"),
            initial_viewport: default_viewport(),
            initial_iterations: DEFAULT_MAX_ITERATIONS,
            zoom: ZoomSettings::default(),
            palette_markers: DEFAULT_MARKERS.map(Colour::from_rgb_hex).to_vec(),
            worker_threads: None,
            frame_interval: DEFAULT_FRAME_INTERVAL,
        }
    }
}

impl ZoomConfig {
    /// Checks everything the typed fields cannot guarantee on their own.
    pub fn validate(&self) -> Result<(), ZoomConfigError> {
        if self.initial_iterations == 0 {
            return Err(ZoomConfigError::ZeroIterations);
        }

        if self.frame_interval.is_zero() {
            return Err(ZoomConfigError::ZeroFrameInterval);
        }

        self.zoom.validate()?;
        self.build_palette()?;

        Ok(())
    }

    pub fn build_palette(&self) -> Result<Palette, ZoomConfigError> {
        Ok(Palette::from_markers(&self.palette_markers)?)
    }
}
