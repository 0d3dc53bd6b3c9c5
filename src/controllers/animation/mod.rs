//! Render loop that drives the zoom animation for a display surface.
//!
//! The controller owns a `ZoomDriver` on a dedicated thread, ticks it at a
//! fixed cadence and hands every completed frame to a `FrameSink`. It knows
//! nothing about windows or input; adapters implement the sink.

mod controller;
pub mod data;
pub mod pacing;
pub mod ports;

pub use controller::AnimationController;
pub use data::frame_data::FrameData;
pub use ports::frame_sink::FrameSink;
