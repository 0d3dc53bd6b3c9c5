use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::palette::Palette;

/// Squared radius past which a point is known to escape.
const BAILOUT_SQUARED: f64 = 4.0;

/// Outcome of iterating one sample point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Escape {
    /// The iteration budget ran out before the orbit left the bailout radius.
    Inside,
    /// The orbit escaped; `smooth_iterations` is the continuous escape count
    /// used as a fractional palette position.
    Escaped { smooth_iterations: f64 },
}

/// Escape-time iteration with smooth colouring over a fixed palette.
#[derive(Debug, Clone)]
pub struct EscapeEvaluator {
    palette: Palette,
}

impl EscapeEvaluator {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Iterates `x, y <- 2xy + a, y² - x² + b` from the origin.
    ///
    /// `a` drives the first component and `b` the second, which reflects the
    /// set compared with the textbook `z² + c` split. Renderers rely on this
    /// orientation, so it must stay as is.
    #[must_use]
    pub fn evaluate(&self, a: f64, b: f64, max_iterations: u32) -> Escape {
        let mut x = 0.0_f64;
        let mut y = 0.0_f64;
        let mut iterations = 0_u32;

        loop {
            let xx = x * x;
            let yy = y * y;
            iterations += 1;

            if iterations >= max_iterations || xx + yy >= BAILOUT_SQUARED {
                break;
            }

            x = 2.0 * x * y + a;
            y = yy - xx + b;
        }

        if iterations >= max_iterations {
            return Escape::Inside;
        }

        let smooth_iterations = f64::from(iterations) + 1.0 - (x * x + y * y).log2().log2();

        Escape::Escaped { smooth_iterations }
    }

    /// Colour of one sample point. Inside points are black.
    #[must_use]
    pub fn colour_at(&self, a: f64, b: f64, max_iterations: u32) -> Colour {
        match self.evaluate(a, b, max_iterations) {
            Escape::Inside => Colour::BLACK,
            Escape::Escaped { smooth_iterations } => self.palette.smooth_colour(smooth_iterations),
        }
    }
}

impl Default for EscapeEvaluator {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_inside() {
        let evaluator = EscapeEvaluator::default();

        assert_eq!(evaluator.evaluate(0.0, 0.0, 50), Escape::Inside);
    }

    #[test]
    fn test_origin_is_inside_for_any_budget() {
        let evaluator = EscapeEvaluator::default();

        for max_iterations in [1, 2, 3, 8, 32, 1000] {
            assert_eq!(evaluator.evaluate(0.0, 0.0, max_iterations), Escape::Inside);
        }
    }

    #[test]
    fn test_inside_renders_black() {
        let evaluator = EscapeEvaluator::default();

        assert_eq!(evaluator.colour_at(0.0, 0.0, 50), Colour::BLACK);
        assert_eq!(evaluator.colour_at(0.0, 0.0, 50).to_argb(), 0xFF00_0000);
    }

    #[test]
    fn test_far_point_escapes_on_second_iteration() {
        let evaluator = EscapeEvaluator::default();

        let Escape::Escaped { smooth_iterations } = evaluator.evaluate(2.0, 2.0, 50) else {
            panic!("(2, 2) should escape");
        };

        // One step lands on (2, 2); the check on step two sees |z|² = 8.
        let expected = 3.0 - 3.0_f64.log2();
        assert!((smooth_iterations - expected).abs() < 1e-12);
    }

    #[test]
    fn test_far_point_colour_comes_from_palette() {
        let evaluator = EscapeEvaluator::default();
        let Escape::Escaped { smooth_iterations } = evaluator.evaluate(2.0, 2.0, 50) else {
            panic!("(2, 2) should escape");
        };

        assert_eq!(
            evaluator.colour_at(2.0, 2.0, 50),
            evaluator.palette().smooth_colour(smooth_iterations)
        );
    }

    #[test]
    fn test_single_iteration_budget_never_escapes() {
        let evaluator = EscapeEvaluator::default();

        assert_eq!(evaluator.evaluate(2.0, 2.0, 1), Escape::Inside);
    }

    #[test]
    fn test_escape_needs_budget_beyond_escape_step() {
        let evaluator = EscapeEvaluator::default();

        // Escape is detected on the second check, which must stay under the budget.
        assert_eq!(evaluator.evaluate(2.0, 2.0, 2), Escape::Inside);
        assert!(matches!(
            evaluator.evaluate(2.0, 2.0, 3),
            Escape::Escaped { .. }
        ));
    }

    #[test]
    fn test_axis_assignment_is_not_symmetric() {
        let evaluator = EscapeEvaluator::default();

        // b carries the real part of c, so (0, -1.5) is c = -1.5 and stays bounded.
        assert_eq!(evaluator.evaluate(0.0, -1.5, 500), Escape::Inside);
        // Swapping the arguments gives c = -1.5i, which escapes.
        assert!(matches!(
            evaluator.evaluate(-1.5, 0.0, 500),
            Escape::Escaped { .. }
        ));
    }
}
