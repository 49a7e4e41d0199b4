use crate::core::colouring::map::sample_colour;
use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;
use crate::core::data::render_state::RenderState;
use crate::core::fractals::escape_time::escape_time;
use crate::core::util::sample_to_complex::sample_to_complex;
use std::num::NonZeroU32;

/// Highest anti-aliasing level; the sample grid is one wider per side.
pub const AA_MAX_SAMPLES: u32 = 6;

const SAMPLE_GRID: NonZeroU32 = NonZeroU32::new(AA_MAX_SAMPLES + 1).unwrap();

/// Anti-aliased colour of one pixel: a regular 7x7 grid of sub-samples,
/// each evaluated and coloured independently, averaged channel-wise.
pub fn supersample_pixel(
    pixel_x: u32,
    pixel_y: u32,
    state: &RenderState,
    palette: &Palette,
    width: u32,
    height: u32,
) -> Colour {
    supersample_pixel_with_grid(pixel_x, pixel_y, state, palette, width, height, SAMPLE_GRID)
}

/// Grid-parameterized implementation backing [`supersample_pixel`].
///
/// The mean truncates: channel sums are divided as integers, biasing each
/// averaged channel down by up to one. Sample placement is a fixed regular
/// grid, so the result is a pure function of its inputs.
fn supersample_pixel_with_grid(
    pixel_x: u32,
    pixel_y: u32,
    state: &RenderState,
    palette: &Palette,
    width: u32,
    height: u32,
    grid: NonZeroU32,
) -> Colour {
    let grid = grid.get();
    let mut total_r: u32 = 0;
    let mut total_g: u32 = 0;
    let mut total_b: u32 = 0;

    for sub_y in 0..grid {
        for sub_x in 0..grid {
            let offset_x = (f64::from(sub_x) + 0.5) / f64::from(grid);
            let offset_y = (f64::from(sub_y) + 0.5) / f64::from(grid);

            let sample = sample_to_complex(pixel_x, pixel_y, offset_x, offset_y, state, width, height);
            let colour = sample_colour(&escape_time(sample, state), state, palette);

            total_r += u32::from(colour.r);
            total_g += u32::from(colour.g);
            total_b += u32::from(colour.b);
        }
    }

    let sample_count = grid * grid;
    Colour {
        r: (total_r / sample_count) as u8,
        g: (total_g / sample_count) as u8,
        b: (total_b / sample_count) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::palette::built_in_palette;
    use crate::core::util::sample_to_complex::PIXEL_CENTRE_OFFSET;

    #[test]
    fn test_single_sample_grid_equals_centre_sample() {
        let state = RenderState::default();
        let palette = built_in_palette(state.colour_scheme);
        let width = 32;
        let height = 32;

        for (x, y) in [(0, 0), (5, 20), (16, 16), (31, 31)] {
            let supersampled = supersample_pixel_with_grid(
                x,
                y,
                &state,
                palette,
                width,
                height,
                NonZeroU32::new(1).unwrap(),
            );

            let sample = sample_to_complex(
                x,
                y,
                PIXEL_CENTRE_OFFSET,
                PIXEL_CENTRE_OFFSET,
                &state,
                width,
                height,
            );
            let single = sample_colour(&escape_time(sample, &state), &state, palette);

            assert_eq!(supersampled, single, "pixel ({}, {})", x, y);
        }
    }

    #[test]
    fn test_supersampling_is_deterministic() {
        let state = RenderState {
            anti_aliasing: true,
            max_iterations: 64,
            ..RenderState::default()
        };
        let palette = built_in_palette(state.colour_scheme);

        let first = supersample_pixel(3, 7, &state, palette, 16, 16);
        let second = supersample_pixel(3, 7, &state, palette, 16, 16);

        assert_eq!(first, second);
    }

    #[test]
    fn test_uniform_interior_region_averages_to_black() {
        // A deep-interior pixel: every sub-sample lands in the cardioid.
        let state = RenderState {
            viewport_height: 0.01,
            viewport_x: 0.0,
            viewport_y: 0.0,
            max_iterations: 64,
            ..RenderState::default()
        };
        let palette = built_in_palette(state.colour_scheme);

        let colour = supersample_pixel(8, 8, &state, palette, 16, 16);

        assert_eq!(colour, Colour::BLACK);
    }
}
