pub mod escape;
pub mod frame_renderer;
pub mod palette;
pub mod supersampler;
