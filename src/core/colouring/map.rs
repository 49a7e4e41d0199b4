use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;
use crate::core::data::render_state::RenderState;
use crate::core::data::sample_result::SampleResult;

/// Scalar driving the palette lookup for an escaped sample, or `None` for
/// interior points, which are always painted black.
pub fn colour_metric(result: &SampleResult, state: &RenderState) -> Option<f64> {
    match *result {
        SampleResult::Interior => None,
        SampleResult::Escaped {
            iteration,
            smooth_iteration,
            stripe_sum,
        } => Some(if state.stripes {
            state.stripe_intensity * (stripe_sum / f64::from(iteration))
        } else {
            smooth_iteration * state.colour_density
        }),
    }
}

/// Cyclic palette lookup: the integer part of the metric picks the stop
/// (Euclidean modulo, so any real metric lands in range), the fractional
/// part interpolates towards the next stop.
pub fn colour_for(metric: f64, palette: &Palette) -> Colour {
    let floor = metric.floor();
    let index = (floor as i64).rem_euclid(palette.len() as i64) as usize;
    let fraction = metric - floor;

    palette
        .colour_at(index)
        .interpolate(palette.colour_at(index + 1), fraction)
}

pub fn sample_colour(result: &SampleResult, state: &RenderState, palette: &Palette) -> Colour {
    match colour_metric(result, state) {
        Some(metric) => colour_for(metric, palette),
        None => Colour::BLACK,
    }
}
