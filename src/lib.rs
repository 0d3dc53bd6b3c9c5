mod adapters;
mod controllers;
mod core;
mod logging;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use adapters::pixel_format::copy_argb_to_rgba;
pub use controllers::animation::{AnimationController, FrameData, FrameSink};
pub use controllers::animation::pacing::FramePacer;
pub use controllers::headless::{HeadlessController, HeadlessReport};
pub use crate::core::actions::render_frame::render_frame::RenderError;
pub use crate::core::data::colour::{Colour, OPAQUE};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_size::{FrameSize, FrameSizeError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::escape::{Escape, EscapeEvaluator};
pub use crate::core::fractals::mandelbrot::frame_renderer::FrameRenderer;
pub use crate::core::fractals::mandelbrot::palette::{
    DEFAULT_MARKERS, PALETTE_SIZE, Palette, PaletteError,
};
pub use crate::core::fractals::mandelbrot::supersampler::Supersampler;
pub use crate::core::zoom::config::{
    DEFAULT_FRAME_INTERVAL, DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_WIDTH,
};
pub use crate::core::zoom::settings::{
    DEFAULT_ATTRACTOR, DEFAULT_CONVERGENCE_RATE, DEFAULT_ITERATION_STEP,
};
pub use crate::core::zoom::{ZoomConfig, ZoomConfigError, ZoomDriver, ZoomSettings};
pub use logging::init_logging;

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
