pub mod escape_time;
pub mod variant;
