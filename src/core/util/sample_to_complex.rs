use crate::core::data::complex::Complex;
use crate::core::data::render_state::RenderState;

/// Offset placing a single sample at the pixel centre.
pub const PIXEL_CENTRE_OFFSET: f64 = 0.5;

/// Maps a (sub-)pixel position to its point on the complex plane. The
/// viewport is centred on `(viewport_x, viewport_y)`; offsets are fractions
/// of one pixel, so `(0.5, 0.5)` samples the pixel centre and supersampling
/// grids pass their own sub-pixel offsets.
pub fn sample_to_complex(
    pixel_x: u32,
    pixel_y: u32,
    offset_x: f64,
    offset_y: f64,
    state: &RenderState,
    width: u32,
    height: u32,
) -> Complex {
    let viewport_width = state.viewport_width();
    let pixel_width = viewport_width / f64::from(width);
    let pixel_height = state.viewport_height / f64::from(height);

    Complex {
        real: state.viewport_x - viewport_width / 2.0
            + (f64::from(pixel_x) + offset_x) * pixel_width,
        imag: state.viewport_y - state.viewport_height / 2.0
            + (f64::from(pixel_y) + offset_y) * pixel_height,
    }
}
