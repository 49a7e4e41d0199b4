pub mod colour;
pub mod complex;
pub mod frame_buffer;
pub mod palette;
pub mod render_state;
pub mod sample_result;
