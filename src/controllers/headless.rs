use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::controllers::animation::data::frame_data::FrameData;
use crate::core::actions::render_frame::render_frame::RenderError;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::zoom::config::ZoomConfig;
use crate::core::zoom::driver::ZoomDriver;
use crate::core::zoom::errors::ZoomConfigError;

/// Timings of a headless run.
///
/// Only aggregates are kept, so the report stays the same size however many
/// frames are recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadlessReport {
    frame_count: u64,
    total_render: Duration,
    total_duration: Duration,
    last: Option<FrameData>,
    slowest: Option<FrameData>,
}

impl HeadlessReport {
    pub fn record(&mut self, frame: FrameData) {
        self.frame_count += 1;
        self.total_render = self.total_render.saturating_add(frame.render_duration);

        if self
            .slowest
            .is_none_or(|slowest| frame.render_duration > slowest.render_duration)
        {
            self.slowest = Some(frame);
        }

        self.last = Some(frame);
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[must_use]
    pub fn last(&self) -> Option<&FrameData> {
        self.last.as_ref()
    }

    #[must_use]
    pub fn slowest(&self) -> Option<&FrameData> {
        self.slowest.as_ref()
    }

    /// Wall time of the whole run, including time spent between frames.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.total_duration
    }

    #[must_use]
    pub fn mean_render_duration(&self) -> Option<Duration> {
        if self.frame_count == 0 {
            return None;
        }

        let nanos = self.total_render.as_nanos() / u128::from(self.frame_count);

        Some(Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX)))
    }
}

/// Runs the zoom synchronously on the calling thread, without a display.
pub struct HeadlessController {
    driver: ZoomDriver,
    buffer: PixelBuffer,
}

impl HeadlessController {
    #[must_use]
    pub fn new(driver: ZoomDriver) -> Self {
        let buffer = PixelBuffer::new(driver.frame_size());

        Self { driver, buffer }
    }

    pub fn from_config(config: &ZoomConfig) -> Result<Self, ZoomConfigError> {
        Ok(Self::new(ZoomDriver::from_config(config)?))
    }

    #[must_use]
    pub fn driver(&self) -> &ZoomDriver {
        &self.driver
    }

    /// Last rendered frame.
    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Ticks the driver `frames` times back to back.
    pub fn run(&mut self, frames: u64) -> Result<HeadlessReport, RenderError> {
        let size = self.driver.frame_size();
        info!(
            width = size.width(),
            height = size.height(),
            frames,
            workers = self.driver.renderer().worker_count(),
            "rendering zoom"
        );

        let run_start = Instant::now();
        let mut report = HeadlessReport::default();

        for _ in 0..frames {
            let start = Instant::now();
            self.driver.tick(self.buffer.pixels_mut())?;

            let frame = FrameData {
                frame_number: self.driver.frame_count(),
                viewport: self.driver.viewport(),
                max_iterations: self.driver.max_iterations(),
                render_duration: start.elapsed(),
            };

            debug!(
                frame = frame.frame_number,
                iterations = frame.max_iterations,
                render_ms = frame.render_duration.as_secs_f64() * 1000.0,
                "frame rendered"
            );

            report.record(frame);
        }

        report.total_duration = run_start.elapsed();

        info!(
            frames = report.frame_count,
            total_ms = report.total_duration.as_secs_f64() * 1000.0,
            "zoom finished"
        );

        Ok(report)
    }
}
