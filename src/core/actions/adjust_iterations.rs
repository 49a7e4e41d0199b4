use crate::core::data::render_state::{RenderState, DEFAULT_VIEWPORT_HEIGHT};

pub const MIN_AUTO_ITERATIONS: u32 = 100;
pub const MAX_AUTO_ITERATIONS: u32 = 10_000;

/// Floor for the manual iteration policy.
pub const MIN_MANUAL_ITERATIONS: u32 = 50;

const MANUAL_STEP_FACTOR: f64 = 1.5;

/// Scales the iteration cap with zoom depth: the budget grows with the
/// base-10 log of the magnification, clamped so shallow views keep a usable
/// minimum and deep views stay affordable. No-op under manual override.
pub fn adjust_iterations(state: &mut RenderState) {
    if !state.auto_iterations {
        return;
    }

    let zoom_factor = DEFAULT_VIEWPORT_HEIGHT / state.viewport_height;
    let cap = (100.0 * (1.0 + zoom_factor).log10()) as u32;

    state.max_iterations = cap.clamp(MIN_AUTO_ITERATIONS, MAX_AUTO_ITERATIONS);
}

/// Manual cap bump; takes the controller out of automatic mode.
pub fn increase_iterations(state: &mut RenderState) {
    state.max_iterations = (f64::from(state.max_iterations) * MANUAL_STEP_FACTOR) as u32;
    state.auto_iterations = false;
}

/// Manual cap reduction with a floor; takes the controller out of automatic
/// mode.
pub fn decrease_iterations(state: &mut RenderState) {
    state.max_iterations =
        ((f64::from(state.max_iterations) / MANUAL_STEP_FACTOR) as u32).max(MIN_MANUAL_ITERATIONS);
    state.auto_iterations = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_view_clamps_to_minimum() {
        let mut state = RenderState {
            viewport_height: 3.0,
            ..RenderState::default()
        };

        adjust_iterations(&mut state);

        // 100 * log10(2) is ~30, clamped up to the minimum
        assert_eq!(state.max_iterations, 100);
    }

    #[test]
    fn test_deep_zoom_grows_logarithmically() {
        let mut state = RenderState {
            viewport_height: 3e-10,
            ..RenderState::default()
        };

        adjust_iterations(&mut state);

        // zoom factor 1e10 -> 100 * log10(1e10 + 1) truncates to 1000
        assert_eq!(state.max_iterations, 1000);
    }

    #[test]
    fn test_extreme_zoom_clamps_to_maximum() {
        let mut state = RenderState {
            viewport_height: 3e-120,
            ..RenderState::default()
        };

        adjust_iterations(&mut state);

        assert_eq!(state.max_iterations, MAX_AUTO_ITERATIONS);
    }

    #[test]
    fn test_manual_override_disables_adjustment() {
        let mut state = RenderState {
            auto_iterations: false,
            max_iterations: 777,
            viewport_height: 3e-10,
            ..RenderState::default()
        };

        adjust_iterations(&mut state);

        assert_eq!(state.max_iterations, 777);
    }

    #[test]
    fn test_increase_scales_by_half_again() {
        let mut state = RenderState {
            max_iterations: 128,
            ..RenderState::default()
        };

        increase_iterations(&mut state);

        assert_eq!(state.max_iterations, 192);
        assert!(!state.auto_iterations);
    }

    #[test]
    fn test_decrease_undoes_increase() {
        let mut state = RenderState {
            max_iterations: 192,
            ..RenderState::default()
        };

        decrease_iterations(&mut state);

        assert_eq!(state.max_iterations, 128);
        assert!(!state.auto_iterations);
    }

    #[test]
    fn test_decrease_stops_at_floor() {
        let mut state = RenderState {
            max_iterations: MIN_MANUAL_ITERATIONS,
            ..RenderState::default()
        };

        decrease_iterations(&mut state);

        assert_eq!(state.max_iterations, MIN_MANUAL_ITERATIONS);
    }
}
