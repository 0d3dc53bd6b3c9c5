use crate::controllers::animation::data::frame_data::FrameData;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Receives completed frames from the render loop.
///
/// Called on the render thread. `pixels` is only borrowed for the call and is
/// reused for the next frame, so implementations copy what they keep.
pub trait FrameSink: Send + Sync {
    fn present(&self, frame: &FrameData, pixels: &PixelBuffer);
}
