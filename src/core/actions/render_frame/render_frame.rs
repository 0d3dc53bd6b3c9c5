use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::render_frame::ports::pixel_algorithm::PixelAlgorithm;
use crate::core::actions::render_frame::render_row::render_row;
use crate::core::data::frame_size::FrameSize;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("destination holds {actual} pixels but a {width}x{height} frame needs {expected}")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Rejects a destination whose length is not exactly one frame.
pub fn check_destination(size: FrameSize, destination: &[u32]) -> Result<(), RenderError> {
    if destination.len() != size.area() {
        return Err(RenderError::BufferSizeMismatch {
            width: size.width(),
            height: size.height(),
            expected: size.area(),
            actual: destination.len(),
        });
    }

    Ok(())
}

/// Renders a whole frame with one task per row on the current rayon pool.
///
/// Each task owns a disjoint `width`-long slice of `destination`. The call
/// returns only after every row has been written. A mis-sized destination is
/// rejected before any row is dispatched.
pub fn render_frame_parallel<Alg>(
    size: FrameSize,
    algorithm: &Alg,
    destination: &mut [u32],
) -> Result<(), RenderError>
where
    Alg: PixelAlgorithm + ?Sized,
{
    check_destination(size, destination)?;

    destination
        .par_chunks_exact_mut(size.width() as usize)
        .enumerate()
        .for_each(|(y, row)| render_row(algorithm, y as u32, row));

    Ok(())
}
