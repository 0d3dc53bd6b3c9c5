//! Windowed zoom viewer.
//!
//! winit owns the window and event loop, `pixels` owns the framebuffer, and
//! the animation controller renders frames on its own thread.

pub mod events;
mod run_gui;

pub use run_gui::run_gui;
