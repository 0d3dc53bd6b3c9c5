use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, error, info};

use crate::controllers::animation::data::frame_data::FrameData;
use crate::controllers::animation::pacing::FramePacer;
use crate::controllers::animation::ports::frame_sink::FrameSink;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::zoom::driver::ZoomDriver;

struct SharedState {
    shutdown: AtomicBool,
    frames_presented: AtomicU64,
    sink: Arc<dyn FrameSink>,
}

/// Ticks a [`ZoomDriver`] on its own thread and presents every frame.
///
/// Frames are strictly sequential: frame N is fully rendered and presented
/// before frame N+1 starts. Shutdown is observed between frames, so a frame
/// already in flight still completes.
pub struct AnimationController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl AnimationController {
    pub fn spawn(
        driver: ZoomDriver,
        frame_interval: Duration,
        sink: Arc<dyn FrameSink>,
    ) -> io::Result<Self> {
        let shared = Arc::new(SharedState {
            shutdown: AtomicBool::new(false),
            frames_presented: AtomicU64::new(0),
            sink,
        });

        let size = driver.frame_size();
        info!(
            width = size.width(),
            height = size.height(),
            workers = driver.renderer().worker_count(),
            interval_ms = frame_interval.as_millis() as u64,
            "starting zoom render loop"
        );

        let worker_shared = Arc::clone(&shared);
        let worker = thread::Builder::new()
            .name("zoom-driver".to_owned())
            .spawn(move || Self::worker_loop(driver, frame_interval, &worker_shared))?;

        Ok(Self {
            shared,
            worker: Some(worker),
        })
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.shared.frames_presented.load(Ordering::Acquire)
    }

    /// False once the loop has exited, whether by shutdown or failure.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stops the loop and waits for the render thread to exit.
    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);

        if let Some(handle) = self.worker.take() {
            handle.thread().unpark();

            if handle.join().is_err() {
                error!("zoom render loop panicked");
            }
        }
    }

    fn worker_loop(mut driver: ZoomDriver, frame_interval: Duration, shared: &SharedState) {
        let mut buffer = PixelBuffer::new(driver.frame_size());
        let mut pacer = FramePacer::new(frame_interval, Instant::now());

        while Self::wait_until(pacer.deadline(), shared) {
            let start = Instant::now();

            if let Err(err) = driver.tick(buffer.pixels_mut()) {
                error!(%err, "zoom frame failed, stopping render loop");
                break;
            }

            let frame = FrameData {
                frame_number: driver.frame_count(),
                viewport: driver.viewport(),
                max_iterations: driver.max_iterations(),
                render_duration: start.elapsed(),
            };

            debug!(
                frame = frame.frame_number,
                iterations = frame.max_iterations,
                width = frame.viewport.width(),
                render_ms = frame.render_duration.as_secs_f64() * 1000.0,
                "frame rendered"
            );

            shared.sink.present(&frame, &buffer);
            shared.frames_presented.fetch_add(1, Ordering::Release);

            pacer.advance(Instant::now());
        }

        info!(
            frames = driver.frame_count(),
            interval_ms = pacer.interval().as_millis() as u64,
            "zoom render loop stopped"
        );
    }

    /// Parks until `deadline`. Returns false as soon as shutdown is requested.
    fn wait_until(deadline: Instant, shared: &SharedState) -> bool {
        loop {
            if shared.shutdown.load(Ordering::Acquire) {
                return false;
            }

            let now = Instant::now();
            if now >= deadline {
                return true;
            }

            thread::park_timeout(deadline - now);
        }
    }
}

impl Drop for AnimationController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
