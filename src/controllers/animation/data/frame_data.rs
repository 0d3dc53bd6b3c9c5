use std::time::Duration;

use crate::core::data::viewport::Viewport;

/// Describes a finished frame handed to a `FrameSink`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameData {
    /// Ticks performed before this frame was rendered, starting at 1.
    pub frame_number: u64,
    pub viewport: Viewport,
    pub max_iterations: u32,
    pub render_duration: Duration,
}
