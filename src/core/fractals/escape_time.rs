use crate::core::data::complex::Complex;
use crate::core::data::render_state::RenderState;
use crate::core::data::sample_result::SampleResult;
use crate::core::fractals::variant::FractalVariant;

pub const ESCAPE_RADIUS_SQUARED: f64 = 100.0 * 100.0;

/// Iterates one sample point and reports how it left (or failed to leave)
/// the escape radius.
///
/// Mandelbrot mode iterates z from the origin with the sample as the added
/// constant; Julia mode iterates z from the sample with the fixed seed as
/// the constant. Pure function of its inputs, safe to call from any number
/// of workers at once.
pub fn escape_time(sample: Complex, state: &RenderState) -> SampleResult {
    let (mut zr, mut zi, cr, ci) = if state.show_julia {
        (
            sample.real,
            sample.imag,
            state.julia_seed.real,
            state.julia_seed.imag,
        )
    } else {
        (0.0, 0.0, sample.real, sample.imag)
    };

    // Closed-form interior tests only hold for the plain Mandelbrot set,
    // and inner colouring needs the full orbit statistics.
    if !state.inner_colouring
        && !state.show_julia
        && state.variant == FractalVariant::Mandelbrot
        && inside_cardioid_or_bulb(cr, ci)
    {
        return SampleResult::Interior;
    }

    let mut zr2 = zr * zr;
    let mut zi2 = zi * zi;
    let mut stripe_sum = 0.0;
    let mut iteration = 0u32;

    while zr2 + zi2 < ESCAPE_RADIUS_SQUARED {
        zi = match state.variant {
            FractalVariant::Mandelbrot => 2.0 * zr * zi,
            FractalVariant::BurningShip => 2.0 * (zr * zi).abs(),
        };
        zi += ci;
        zr = zr2 - zi2 + cr;
        zr2 = zr * zr;
        zi2 = zi * zi;

        if state.stripes {
            stripe_sum += (zi.atan2(zr) * state.stripe_frequency).sin().powi(2);
        }

        iteration += 1;
        if iteration == state.max_iterations {
            return if state.inner_colouring {
                SampleResult::Escaped {
                    iteration,
                    smooth_iteration: smooth_iteration(iteration, zr2 + zi2),
                    stripe_sum,
                }
            } else {
                SampleResult::Interior
            };
        }
    }

    SampleResult::Escaped {
        iteration,
        smooth_iteration: smooth_iteration(iteration, zr2 + zi2),
        stripe_sum,
    }
}

/// Normalized escape count; the fractional part removes the banding the raw
/// integer count would produce.
fn smooth_iteration(iteration: u32, magnitude_squared: f64) -> f64 {
    f64::from(iteration) + 1.0 - (magnitude_squared.ln() / 2.0).ln() / std::f64::consts::LN_2
}

fn inside_cardioid_or_bulb(cr: f64, ci: f64) -> bool {
    let q = (cr - 0.25) * (cr - 0.25) + ci * ci;
    if q * (q + (cr - 0.25)) < 0.25 * ci * ci {
        return true;
    }

    (cr + 1.0) * (cr + 1.0) + ci * ci < 0.0625
}
