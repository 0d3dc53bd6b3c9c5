use std::sync::Arc;

use pixels::{Pixels, SurfaceTexture};
use tracing::warn;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::adapters::pixel_format::copy_argb_to_rgba;
use crate::controllers::animation::FrameSink;
use crate::core::data::frame_size::FrameSize;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;

pub const WINDOW_TITLE: &str = "Fractal Zoom";

/// Display surface backed by a `pixels` framebuffer of the frame's size.
pub struct PixelsPresenter {
    window: &'static Window,
    pixels: Pixels<'static>,
    adapter: Arc<PixelsAdapter>,
    frame_size: FrameSize,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        frame_size: FrameSize,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let mut pixels = Pixels::new(frame_size.width(), frame_size.height(), surface_texture)?;

        for pixel in pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }

        Ok(Self {
            window,
            pixels,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            frame_size,
        })
    }

    pub fn share_sink(&self) -> Arc<dyn FrameSink> {
        Arc::clone(&self.adapter) as Arc<dyn FrameSink>
    }

    /// Copies the newest frame, if any, into the framebuffer and draws it.
    pub fn render(&mut self) -> Result<(), pixels::Error> {
        let frame_size = self.frame_size;
        let target = self.pixels.frame_mut();

        let drawn = self.adapter.with_fresh_frame(|frame, buffer| {
            if buffer.size() == frame_size {
                copy_argb_to_rgba(buffer.pixels(), target);
            } else {
                warn!(frame = frame.frame_number, "dropping frame with unexpected size");
            }
        });

        if let Some(frame) = drawn {
            self.window.set_title(&format!(
                "{WINDOW_TITLE} | frame {} | {} iterations",
                frame.frame_number, frame.max_iterations
            ));
        }

        self.pixels.render()
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.pixels.resize_surface(width, height) {
            warn!(%err, width, height, "failed to resize surface");
        }
    }
}
