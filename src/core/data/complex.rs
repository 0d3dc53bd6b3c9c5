/// A point on the complex plane.
///
/// Only used to name coordinates (the attractor, pixel centres). The escape
/// iteration works on raw `f64` pairs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }
}
