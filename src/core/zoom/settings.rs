use crate::core::data::complex::Complex;
use crate::core::zoom::errors::ZoomConfigError;

/// Point the viewport converges on.
pub const DEFAULT_ATTRACTOR: Complex = Complex::new(-0.743643887037151, 0.131825904205330);
/// Fraction of the remaining distance closed per tick.
pub const DEFAULT_CONVERGENCE_RATE: f64 = 1.0 / 20.0;
pub const DEFAULT_ITERATION_STEP: u32 = 8;

/// Fixed parameters of the zoom animation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomSettings {
    pub attractor: Complex,
    pub convergence_rate: f64,
    pub iteration_step: u32,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            attractor: DEFAULT_ATTRACTOR,
            convergence_rate: DEFAULT_CONVERGENCE_RATE,
            iteration_step: DEFAULT_ITERATION_STEP,
        }
    }
}

impl ZoomSettings {
    pub fn validate(&self) -> Result<(), ZoomConfigError> {
        let rate = self.convergence_rate;
        if !(rate > 0.0 && rate < 1.0) {
            return Err(ZoomConfigError::InvalidConvergenceRate { rate });
        }

        if !self.attractor.real.is_finite() || !self.attractor.imag.is_finite() {
            return Err(ZoomConfigError::NonFiniteAttractor {
                real: self.attractor.real,
                imag: self.attractor.imag,
            });
        }

        if self.iteration_step == 0 {
            return Err(ZoomConfigError::ZeroIterationStep);
        }

        Ok(())
    }
}
