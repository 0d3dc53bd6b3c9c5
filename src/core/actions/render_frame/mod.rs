pub mod ports;
pub mod render_frame;
pub mod render_row;
