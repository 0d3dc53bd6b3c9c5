use std::sync::{Mutex, PoisonError};

use tracing::debug;
use winit::event_loop::EventLoopProxy;

use crate::controllers::animation::{FrameData, FrameSink};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::events::GuiEvent;

struct LatestFrame {
    data: FrameData,
    pixels: PixelBuffer,
    fresh: bool,
}

/// Hands frames from the render thread to the UI thread.
///
/// Only the newest frame is kept; a frame the UI has not drawn yet is
/// overwritten by the next one.
pub struct PixelsAdapter {
    latest: Mutex<Option<LatestFrame>>,
    event_loop_proxy: Mutex<EventLoopProxy<GuiEvent>>,
}

impl FrameSink for PixelsAdapter {
    fn present(&self, frame: &FrameData, pixels: &PixelBuffer) {
        {
            let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);

            match latest.as_mut() {
                Some(slot) => {
                    if slot.pixels.copy_from(pixels).is_err() {
                        slot.pixels = pixels.clone();
                    }
                    slot.data = *frame;
                    slot.fresh = true;
                }
                None => {
                    *latest = Some(LatestFrame {
                        data: *frame,
                        pixels: pixels.clone(),
                        fresh: true,
                    });
                }
            }
        }

        let proxy = self
            .event_loop_proxy
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if proxy.send_event(GuiEvent::FrameReady).is_err() {
            debug!(frame = frame.frame_number, "event loop closed, frame not shown");
        }
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            latest: Mutex::new(None),
            event_loop_proxy: Mutex::new(event_loop_proxy),
        }
    }

    /// Runs `draw` on the newest frame if it has not been drawn yet.
    pub fn with_fresh_frame<F>(&self, draw: F) -> Option<FrameData>
    where
        F: FnOnce(&FrameData, &PixelBuffer),
    {
        let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        let slot = latest.as_mut().filter(|slot| slot.fresh)?;

        draw(&slot.data, &slot.pixels);
        slot.fresh = false;

        Some(slot.data)
    }
}
