pub mod motion;

pub use motion::{pan, pan_by_pixels, reset_view, zoom_about, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
