use crate::core::data::complex::Complex;
use crate::core::data::render_state::{
    RenderState, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_X, DEFAULT_VIEWPORT_Y,
};

/// Wheel-step factors: halve the viewport going in, double it going out.
pub const ZOOM_IN_FACTOR: f64 = 0.5;
pub const ZOOM_OUT_FACTOR: f64 = 2.0;

/// Scales the viewport about a fixed focus point: the focus keeps its
/// position on screen while the viewport height shrinks (factor < 1) or
/// grows (factor > 1).
pub fn zoom_about(state: &mut RenderState, focus: Complex, factor: f64) {
    state.viewport_x = focus.real + (state.viewport_x - focus.real) * factor;
    state.viewport_y = focus.imag + (state.viewport_y - focus.imag) * factor;
    state.viewport_height *= factor;
}

/// Translates the viewport centre by a world-space delta.
pub fn pan(state: &mut RenderState, delta: Complex) {
    state.viewport_x += delta.real;
    state.viewport_y += delta.imag;
}

/// Translates the viewport centre by a drag measured in pixels.
pub fn pan_by_pixels(state: &mut RenderState, delta_x: f64, delta_y: f64, width: u32, height: u32) {
    pan(
        state,
        Complex {
            real: delta_x * state.viewport_width() / f64::from(width),
            imag: delta_y * state.viewport_height / f64::from(height),
        },
    );
}

/// Restores the home view over the whole set.
pub fn reset_view(state: &mut RenderState) {
    state.viewport_x = DEFAULT_VIEWPORT_X;
    state.viewport_y = DEFAULT_VIEWPORT_Y;
    state.viewport_height = DEFAULT_VIEWPORT_HEIGHT;
}
