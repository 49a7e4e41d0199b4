mod controllers;
mod core;
mod storage;

pub use crate::controllers::animate::{animate_controller, AnimationDriver, CameraPath};
pub use crate::core::actions::adjust_iterations::{
    adjust_iterations, decrease_iterations, increase_iterations, MAX_AUTO_ITERATIONS,
    MIN_AUTO_ITERATIONS,
};
pub use crate::core::actions::render_frame::render_frame::{
    render_frame, render_frame_with_bands, RenderFrameError,
};
pub use crate::core::actions::render_frame::render_preview::render_preview;
pub use crate::core::actions::render_frame::supersample::{supersample_pixel, AA_MAX_SAMPLES};
pub use crate::core::colouring::map::{colour_for, colour_metric, sample_colour};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError, BYTES_PER_PIXEL};
pub use crate::core::data::palette::{built_in_palette, Palette, PaletteError};
pub use crate::core::data::render_state::{RenderState, RenderStateError, ASPECT_RATIO};
pub use crate::core::data::sample_result::SampleResult;
pub use crate::core::fractals::escape_time::{escape_time, ESCAPE_RADIUS_SQUARED};
pub use crate::core::fractals::variant::FractalVariant;
pub use crate::core::navigation::{
    pan, pan_by_pixels, reset_view, zoom_about, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR,
};
pub use crate::storage::write_ppm::write_ppm;
