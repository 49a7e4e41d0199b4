use crate::core::actions::render_frame::supersample::supersample_pixel;
use crate::core::colouring::map::sample_colour;
use crate::core::data::frame_buffer::{FrameBuffer, BYTES_PER_PIXEL};
use crate::core::data::palette::{built_in_palette, Palette};
use crate::core::data::render_state::{RenderState, RenderStateError};
use crate::core::fractals::escape_time::escape_time;
use crate::core::util::calculate_bands_for_height::calculate_bands_for_height;
use crate::core::util::calculate_workers_for_banding::calculate_workers_for_banding;
use crate::core::util::sample_to_complex::{sample_to_complex, PIXEL_CENTRE_OFFSET};
use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;
use std::ops::Range;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderFrameError {
    State(RenderStateError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::State(err) => write!(f, "render state error: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::State(err) => Some(err),
        }
    }
}

impl From<RenderStateError> for RenderFrameError {
    fn from(err: RenderStateError) -> Self {
        Self::State(err)
    }
}

/// Contiguous, non-overlapping row ranges covering the full height. Bands
/// are equal-sized; the last absorbs the division remainder.
fn band_row_ranges(height: u32, bands: u32) -> Vec<Range<u32>> {
    let band_height = height / bands;

    (0..bands)
        .map(|band| {
            let start = band * band_height;
            let end = if band == bands - 1 {
                height
            } else {
                start + band_height
            };
            start..end
        })
        .collect()
}

/// Renders one full frame into the buffer, blocking until every band worker
/// has finished. One worker per available hardware thread.
pub fn render_frame(buffer: &mut FrameBuffer, state: &RenderState) -> Result<(), RenderFrameError> {
    let workers = calculate_workers_for_banding(buffer.height());

    render_frame_with_bands(buffer, state, NonZeroU32::new(workers).unwrap())
}

/// Like [`render_frame`] with an explicit band count. The output is
/// byte-identical for every band count: a pixel's colour depends only on
/// its own position and the state.
pub fn render_frame_with_bands(
    buffer: &mut FrameBuffer,
    state: &RenderState,
    bands: NonZeroU32,
) -> Result<(), RenderFrameError> {
    state.validate()?;

    let width = buffer.width();
    let height = buffer.height();
    let row_bytes = buffer.row_bytes();
    let bands = calculate_bands_for_height(bands, height);
    let palette = built_in_palette(state.colour_scheme);

    let mut rest = buffer.data_mut();
    rayon::scope(|scope| {
        for rows in band_row_ranges(height, bands) {
            let band_rows = (rows.end - rows.start) as usize;
            let (band, tail) = std::mem::take(&mut rest).split_at_mut(band_rows * row_bytes);
            rest = tail;

            scope.spawn(move |_| render_band(band, rows.start, state, palette, width, height));
        }
    });

    Ok(())
}

fn render_band(
    band: &mut [u8],
    start_row: u32,
    state: &RenderState,
    palette: &Palette,
    width: u32,
    height: u32,
) {
    let row_bytes = width as usize * BYTES_PER_PIXEL;

    for (row_index, row) in band.chunks_exact_mut(row_bytes).enumerate() {
        let y = start_row + row_index as u32;

        for x in 0..width {
            let colour = if state.anti_aliasing {
                supersample_pixel(x, y, state, palette, width, height)
            } else {
                let sample = sample_to_complex(
                    x,
                    y,
                    PIXEL_CENTRE_OFFSET,
                    PIXEL_CENTRE_OFFSET,
                    state,
                    width,
                    height,
                );
                sample_colour(&escape_time(sample, state), state, palette)
            };

            let index = x as usize * BYTES_PER_PIXEL;
            row[index] = colour.r;
            row[index + 1] = colour.g;
            row[index + 2] = colour.b;
            row[index + 3] = u8::MAX;
        }
    }
}
