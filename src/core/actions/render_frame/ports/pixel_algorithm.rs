use crate::core::data::point::Point;

/// Produces the packed ARGB value of one output pixel.
///
/// Implementations are shared across worker threads while a frame renders,
/// hence the `Sync` bound.
pub trait PixelAlgorithm: Sync {
    fn compute(&self, pixel: Point) -> u32;
}
