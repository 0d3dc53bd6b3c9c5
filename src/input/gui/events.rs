/// Custom user events for the GUI event loop.
///
/// The render thread sends these to wake the UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiEvent {
    /// A new frame has been handed to the presenter and is ready to draw.
    FrameReady,
}
