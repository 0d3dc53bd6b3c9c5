use tracing::warn;

use crate::core::actions::render_frame::render_frame::{RenderError, check_destination};
use crate::core::data::frame_size::FrameSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::escape::EscapeEvaluator;
use crate::core::fractals::mandelbrot::frame_renderer::FrameRenderer;
use crate::core::zoom::config::ZoomConfig;
use crate::core::zoom::errors::ZoomConfigError;
use crate::core::zoom::settings::ZoomSettings;

/// Owns the animation state and renders one frame per tick.
///
/// Each tick pulls all four viewport bounds a fixed fraction of the way
/// towards the attractor and raises the iteration budget by a fixed step.
/// The viewport converges geometrically and never widens again.
#[derive(Debug)]
pub struct ZoomDriver {
    renderer: FrameRenderer,
    viewport: Viewport,
    max_iterations: u32,
    settings: ZoomSettings,
    frame_count: u64,
}

impl ZoomDriver {
    pub fn new(
        renderer: FrameRenderer,
        viewport: Viewport,
        initial_iterations: u32,
        settings: ZoomSettings,
    ) -> Result<Self, ZoomConfigError> {
        if initial_iterations == 0 {
            return Err(ZoomConfigError::ZeroIterations);
        }
        settings.validate()?;

        if !viewport.contains_point(settings.attractor) {
            warn!(
                real = settings.attractor.real,
                imag = settings.attractor.imag,
                "attractor lies outside the initial viewport; the zoom will pan before it settles"
            );
        }

        Ok(Self {
            renderer,
            viewport,
            max_iterations: initial_iterations,
            settings,
            frame_count: 0,
        })
    }

    pub fn from_config(config: &ZoomConfig) -> Result<Self, ZoomConfigError> {
        config.validate()?;

        let evaluator = EscapeEvaluator::new(config.build_palette()?);
        let renderer = FrameRenderer::new(config.frame_size, evaluator, config.worker_threads)?;

        Self::new(
            renderer,
            config.initial_viewport,
            config.initial_iterations,
            config.zoom,
        )
    }

    #[must_use]
    pub fn frame_size(&self) -> FrameSize {
        self.renderer.size()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn settings(&self) -> ZoomSettings {
        self.settings
    }

    /// Number of ticks performed so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[must_use]
    pub fn renderer(&self) -> &FrameRenderer {
        &self.renderer
    }

    /// Moves the animation one step forward without rendering.
    pub fn advance(&mut self) {
        self.viewport = self
            .viewport
            .converge_towards(self.settings.attractor, self.settings.convergence_rate);
        self.max_iterations = self
            .max_iterations
            .saturating_add(self.settings.iteration_step);
        self.frame_count += 1;
    }

    /// Advances the animation and renders the new state into `destination`.
    ///
    /// A mis-sized destination is rejected before the state changes.
    pub fn tick(&mut self, destination: &mut [u32]) -> Result<(), RenderError> {
        check_destination(self.frame_size(), destination)?;

        self.advance();
        self.render_current(destination)
    }

    /// Renders the current state without advancing it.
    pub fn render_current(&self, destination: &mut [u32]) -> Result<(), RenderError> {
        self.renderer
            .render(&self.viewport, self.max_iterations, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::OPAQUE;
    use crate::core::data::complex::Complex;
    use std::num::NonZeroUsize;

    fn small_config() -> ZoomConfig {
        ZoomConfig {
            frame_size: FrameSize::new(24, 15).unwrap(),
            worker_threads: NonZeroUsize::new(2),
            ..ZoomConfig::default()
        }
    }

    fn gaps(viewport: Viewport, target: Complex) -> [f64; 4] {
        [
            target.real - viewport.min_x(),
            viewport.max_x() - target.real,
            target.imag - viewport.min_y(),
            viewport.max_y() - target.imag,
        ]
    }

    #[test]
    fn test_from_config_starts_at_initial_state() {
        let config = small_config();
        let driver = ZoomDriver::from_config(&config).unwrap();

        assert_eq!(driver.viewport(), config.initial_viewport);
        assert_eq!(driver.max_iterations(), 32);
        assert_eq!(driver.frame_count(), 0);
        assert_eq!(driver.frame_size(), config.frame_size);
        assert_eq!(driver.renderer().worker_count(), 2);
    }

    #[test]
    fn test_from_config_rejects_invalid_config() {
        let config = ZoomConfig {
            initial_iterations: 0,
            ..small_config()
        };

        assert!(matches!(
            ZoomDriver::from_config(&config),
            Err(ZoomConfigError::ZeroIterations)
        ));
    }

    #[test]
    fn test_iteration_budget_grows_by_step_per_tick() {
        let mut driver = ZoomDriver::from_config(&small_config()).unwrap();

        for _ in 0..25 {
            driver.advance();
        }

        assert_eq!(driver.max_iterations(), 32 + 8 * 25);
        assert_eq!(driver.frame_count(), 25);
    }

    #[test]
    fn test_iteration_budget_saturates() {
        let config = ZoomConfig {
            initial_iterations: u32::MAX - 3,
            ..small_config()
        };
        let mut driver = ZoomDriver::from_config(&config).unwrap();

        driver.advance();

        assert_eq!(driver.max_iterations(), u32::MAX);
    }

    #[test]
    fn test_gap_shrinks_by_one_minus_rate_per_tick() {
        let mut driver = ZoomDriver::from_config(&small_config()).unwrap();
        let target = driver.settings().attractor;

        for _ in 0..10 {
            let before = gaps(driver.viewport(), target);
            driver.advance();
            let after = gaps(driver.viewport(), target);

            for (b, a) in before.iter().zip(after) {
                assert!((a - b * 0.95).abs() < 1e-12, "{a} vs {b} * 0.95");
            }
        }
    }

    #[test]
    fn test_twenty_ticks_close_gap_to_about_a_third() {
        let mut driver = ZoomDriver::from_config(&small_config()).unwrap();
        let target = driver.settings().attractor;
        let original = gaps(driver.viewport(), target);

        for _ in 0..20 {
            driver.advance();
        }

        let bound = 0.95_f64.powi(20) + 1e-9;
        for (o, g) in original.iter().zip(gaps(driver.viewport(), target)) {
            assert!(g > 0.0, "viewport must not reach the attractor");
            assert!(g <= o * bound, "{g} should be at most {bound} of {o}");
        }
    }

    #[test]
    fn test_viewport_never_widens() {
        let mut driver = ZoomDriver::from_config(&small_config()).unwrap();

        for _ in 0..50 {
            let before = driver.viewport();
            driver.advance();
            let after = driver.viewport();

            assert!(after.width() < before.width());
            assert!(after.height() < before.height());
            assert!(after.min_x() >= before.min_x());
            assert!(after.max_x() <= before.max_x());
        }
    }

    #[test]
    fn test_tick_renders_advanced_state() {
        let config = small_config();
        let mut driver = ZoomDriver::from_config(&config).unwrap();
        let mut reference = ZoomDriver::from_config(&config).unwrap();
        let mut ticked = vec![0; config.frame_size.area()];
        let mut expected = vec![0; config.frame_size.area()];

        driver.tick(&mut ticked).unwrap();
        reference.advance();
        reference.render_current(&mut expected).unwrap();

        assert_eq!(driver.frame_count(), 1);
        assert_eq!(driver.max_iterations(), 40);
        assert_eq!(ticked, expected);
        assert!(ticked.iter().all(|&p| p & OPAQUE == OPAQUE));
    }

    #[test]
    fn test_tick_with_wrong_buffer_leaves_state_unchanged() {
        let mut driver = ZoomDriver::from_config(&small_config()).unwrap();
        let mut buffer = vec![0; 10];

        let result = driver.tick(&mut buffer);

        assert!(matches!(result, Err(RenderError::BufferSizeMismatch { .. })));
        assert_eq!(driver.frame_count(), 0);
        assert_eq!(driver.max_iterations(), 32);
    }

    #[test]
    fn test_render_current_does_not_advance() {
        let config = small_config();
        let driver = ZoomDriver::from_config(&config).unwrap();
        let mut buffer = vec![0; config.frame_size.area()];

        driver.render_current(&mut buffer).unwrap();

        assert_eq!(driver.frame_count(), 0);
        assert_eq!(driver.viewport(), config.initial_viewport);
    }

    #[test]
    fn test_new_rejects_invalid_settings() {
        let config = small_config();
        let renderer = FrameRenderer::new(
            config.frame_size,
            EscapeEvaluator::default(),
            config.worker_threads,
        )
        .unwrap();
        let settings = ZoomSettings {
            iteration_step: 0,
            ..ZoomSettings::default()
        };

        let result = ZoomDriver::new(renderer, config.initial_viewport, 32, settings);

        assert!(matches!(result, Err(ZoomConfigError::ZeroIterationStep)));
    }

    #[test]
    fn test_attractor_outside_viewport_is_accepted() {
        let config = small_config();
        let renderer = FrameRenderer::new(
            config.frame_size,
            EscapeEvaluator::default(),
            config.worker_threads,
        )
        .unwrap();
        let target = Complex::new(1.5, 1.5);
        let settings = ZoomSettings {
            attractor: target,
            ..ZoomSettings::default()
        };
        assert!(!config.initial_viewport.contains_point(target));

        let mut driver = ZoomDriver::new(renderer, config.initial_viewport, 32, settings).unwrap();
        for _ in 0..200 {
            driver.advance();
        }

        // Every bound approaches the target, even the ones that started short of it.
        let view = driver.viewport();
        assert!((target.real - view.max_x()).abs() < 1e-3);
        assert!((target.imag - view.max_y()).abs() < 1e-3);
        assert!(view.width() < 1e-3);
    }
}
