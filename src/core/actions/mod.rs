pub mod adjust_iterations;
pub mod render_frame;
