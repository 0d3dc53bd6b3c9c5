use thiserror::Error;

use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::Point;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("frame size {width}x{height} needs {expected} pixels but buffer holds {actual}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

impl PixelBufferError {
    fn size_mismatch(size: FrameSize, actual: usize) -> Self {
        Self::SizeMismatch {
            width: size.width(),
            height: size.height(),
            expected: size.area(),
            actual,
        }
    }
}

pub type PixelBufferData = Vec<u32>;

/// Row-major frame of packed `0xAARRGGBB` pixels.
///
/// The length is fixed at construction; renderers only ever receive the
/// mutable slice, so a frame can be refilled but never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    size: FrameSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(size: FrameSize) -> Self {
        Self {
            size,
            buffer: vec![0; size.area()],
        }
    }

    pub fn from_data(size: FrameSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        if size.area() != buffer.len() {
            return Err(PixelBufferError::size_mismatch(size, buffer.len()));
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> FrameSize {
        self.size
    }

    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.buffer
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.buffer
    }

    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<u32> {
        self.size.index_of(point).map(|index| self.buffer[index])
    }

    /// Overwrites this frame with the contents of `other`.
    pub fn copy_from(&mut self, other: &PixelBuffer) -> Result<(), PixelBufferError> {
        if self.size != other.size {
            return Err(PixelBufferError::size_mismatch(self.size, other.buffer.len()));
        }

        self.buffer.copy_from_slice(&other.buffer);
        Ok(())
    }
}
