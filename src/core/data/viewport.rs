use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::frame_size::FrameSize;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport real range must be non-empty: min_x {min_x} >= max_x {max_x}")]
    EmptyRealRange { min_x: f64, max_x: f64 },
    #[error("viewport imaginary range must be non-empty: min_y {min_y} >= max_y {max_y}")]
    EmptyImagRange { min_y: f64, max_y: f64 },
}

/// Region of the complex plane mapped onto a frame.
///
/// `min` is the plane coordinate of pixel (0, 0). Columns advance along the
/// real axis and rows along the imaginary axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    min: Complex,
    max: Complex,
}

impl Viewport {
    pub fn new(min: Complex, max: Complex) -> Result<Self, ViewportError> {
        // Negated comparisons so NaN bounds are rejected too.
        if !(min.real < max.real) {
            return Err(ViewportError::EmptyRealRange {
                min_x: min.real,
                max_x: max.real,
            });
        }

        if !(min.imag < max.imag) {
            return Err(ViewportError::EmptyImagRange {
                min_y: min.imag,
                max_y: max.imag,
            });
        }

        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min.real
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max.real
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min.imag
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max.imag
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.min.real <= point.real
            && self.min.imag <= point.imag
            && self.max.real >= point.real
            && self.max.imag >= point.imag
    }

    /// Plane distance covered by one pixel, as `(horizontal, vertical)`.
    #[must_use]
    pub fn pixel_steps(&self, size: FrameSize) -> (f64, f64) {
        (
            self.width() / f64::from(size.width()),
            self.height() / f64::from(size.height()),
        )
    }

    /// Moves every bound `rate` of the way towards `target`.
    ///
    /// With `0 < rate < 1` both extents shrink by `1 - rate` and the bounds
    /// stay ordered. At extreme zoom `f64` rounding may make them collapse;
    /// the result is not revalidated.
    #[must_use]
    pub fn converge_towards(&self, target: Complex, rate: f64) -> Self {
        Self {
            min: Complex {
                real: self.min.real + (target.real - self.min.real) * rate,
                imag: self.min.imag + (target.imag - self.min.imag) * rate,
            },
            max: Complex {
                real: self.max.real + (target.real - self.max.real) * rate,
                imag: self.max.imag + (target.imag - self.max.imag) * rate,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Viewport {
        Viewport::new(Complex::new(min_x, min_y), Complex::new(max_x, max_y)).unwrap()
    }

    #[test]
    fn test_viewport_new_valid() {
        let view = viewport(-2.25, 0.75, -0.95, 0.95);

        assert_eq!(view.min_x(), -2.25);
        assert_eq!(view.max_x(), 0.75);
        assert_eq!(view.min_y(), -0.95);
        assert_eq!(view.max_y(), 0.95);
        assert_eq!(view.width(), 3.0);
    }

    #[test]
    fn test_viewport_rejects_empty_real_range() {
        let equal = Viewport::new(Complex::new(1.0, 0.0), Complex::new(1.0, 1.0));
        let inverted = Viewport::new(Complex::new(2.0, 0.0), Complex::new(-2.0, 1.0));

        assert_eq!(
            equal,
            Err(ViewportError::EmptyRealRange { min_x: 1.0, max_x: 1.0 })
        );
        assert_eq!(
            inverted,
            Err(ViewportError::EmptyRealRange { min_x: 2.0, max_x: -2.0 })
        );
    }

    #[test]
    fn test_viewport_rejects_empty_imag_range() {
        let equal = Viewport::new(Complex::new(0.0, 0.5), Complex::new(1.0, 0.5));
        let inverted = Viewport::new(Complex::new(0.0, 1.0), Complex::new(1.0, -1.0));

        assert_eq!(
            equal,
            Err(ViewportError::EmptyImagRange { min_y: 0.5, max_y: 0.5 })
        );
        assert_eq!(
            inverted,
            Err(ViewportError::EmptyImagRange { min_y: 1.0, max_y: -1.0 })
        );
    }

    #[test]
    fn test_viewport_rejects_nan_bounds() {
        let result = Viewport::new(Complex::new(f64::NAN, 0.0), Complex::new(1.0, 1.0));

        assert!(matches!(result, Err(ViewportError::EmptyRealRange { .. })));
    }

    #[test]
    fn test_viewport_contains_point() {
        let view = viewport(-1.0, 1.0, -1.0, 1.0);

        assert!(view.contains_point(Complex::new(0.0, 0.0)));
        assert!(view.contains_point(Complex::new(1.0, -1.0)));
        assert!(!view.contains_point(Complex::new(1.5, 0.0)));
        assert!(!view.contains_point(Complex::new(0.0, -1.5)));
    }

    #[test]
    fn test_pixel_steps_divide_by_pixel_count() {
        let view = viewport(-2.0, 2.0, -1.0, 1.0);
        let size = FrameSize::new(8, 4).unwrap();

        assert_eq!(view.pixel_steps(size), (0.5, 0.5));
    }

    #[test]
    fn test_converge_towards_closes_gap_by_rate() {
        let view = viewport(-2.0, 2.0, -1.0, 1.0);
        let target = Complex::new(1.0, 0.5);

        let next = view.converge_towards(target, 0.5);

        assert_eq!(next.min_x(), -0.5);
        assert_eq!(next.max_x(), 1.5);
        assert_eq!(next.min_y(), -0.25);
        assert_eq!(next.max_y(), 0.75);
        assert_eq!(next.width(), view.width() * 0.5);
    }

    #[test]
    fn test_converge_towards_keeps_target_inside() {
        let target = Complex::new(-0.743643887037151, 0.131825904205330);
        let mut view = viewport(-2.25, 0.75, -0.95, 0.95);

        for _ in 0..100 {
            view = view.converge_towards(target, 1.0 / 20.0);
            assert!(view.contains_point(target));
            assert!(view.min_x() < view.max_x());
            assert!(view.min_y() < view.max_y());
        }
    }
}
