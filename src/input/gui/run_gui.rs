use tracing::{error, info};
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder},
    window::{Window, WindowBuilder},
};

use crate::controllers::animation::AnimationController;
use crate::core::zoom::{ZoomConfig, ZoomDriver};
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::presenter::{PixelsPresenter, WINDOW_TITLE};

/// Opens a window and zooms into the configured attractor until it is closed.
pub fn run_gui(config: ZoomConfig) -> anyhow::Result<()> {
    let driver = ZoomDriver::from_config(&config)?;
    let frame_size = config.frame_size;

    let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;

    // pixels needs a 'static surface handle
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(frame_size.width(), frame_size.height()))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let mut presenter = PixelsPresenter::new(window, event_loop.create_proxy(), frame_size)?;
    let mut controller = Some(AnimationController::spawn(
        driver,
        config.frame_interval,
        presenter.share_sink(),
    )?);

    info!(
        width = frame_size.width(),
        height = frame_size.height(),
        interval_ms = config.frame_interval.as_millis() as u64,
        "window opened"
    );

    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run(move |event, elwt| match event {
        Event::UserEvent(GuiEvent::FrameReady) => window.request_redraw(),
        Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => {
                if let Some(mut controller) = controller.take() {
                    controller.shutdown();
                    info!(frames = controller.frames_presented(), "window closed");
                }
                elwt.exit();
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = presenter.render() {
                    error!(%err, "failed to draw frame");
                    elwt.exit();
                }
            }
            WindowEvent::Resized(size) => presenter.resize_surface(size.width, size.height),
            _ => {}
        },
        _ => {}
    })?;

    Ok(())
}
