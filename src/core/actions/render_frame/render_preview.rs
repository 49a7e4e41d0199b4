use crate::core::actions::render_frame::render_frame::{render_frame, RenderFrameError};
use crate::core::data::frame_buffer::{FrameBuffer, BYTES_PER_PIXEL};
use crate::core::data::render_state::RenderState;
use std::num::NonZeroU32;

/// Fast preview render: the frame is computed at `1/reduction` resolution
/// and upscaled nearest-neighbour into the full-size buffer. Reduction 1 is
/// a plain full-quality render.
pub fn render_preview(
    buffer: &mut FrameBuffer,
    state: &RenderState,
    reduction: NonZeroU32,
) -> Result<(), RenderFrameError> {
    if reduction.get() == 1 {
        return render_frame(buffer, state);
    }

    let width = buffer.width();
    let height = buffer.height();
    let preview_width = (width / reduction).max(1);
    let preview_height = (height / reduction).max(1);

    let mut preview = match FrameBuffer::new(preview_width, preview_height) {
        Ok(preview) => preview,
        // Both dimensions are clamped to at least one pixel above
        Err(_) => unreachable!("preview dimensions are never zero"),
    };
    render_frame(&mut preview, state)?;

    let data = buffer.data_mut();
    for y in 0..height {
        let source_y = (u64::from(y) * u64::from(preview_height) / u64::from(height)) as u32;

        for x in 0..width {
            let source_x = (u64::from(x) * u64::from(preview_width) / u64::from(width)) as u32;

            let source_index = (source_y as usize * preview_width as usize + source_x as usize)
                * BYTES_PER_PIXEL;
            let target_index = (y as usize * width as usize + x as usize) * BYTES_PER_PIXEL;

            data[target_index..target_index + BYTES_PER_PIXEL]
                .copy_from_slice(&preview.data()[source_index..source_index + BYTES_PER_PIXEL]);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction_one_matches_full_render() {
        let state = RenderState {
            max_iterations: 48,
            ..RenderState::default()
        };

        let mut full = FrameBuffer::new(32, 18).unwrap();
        let mut preview = FrameBuffer::new(32, 18).unwrap();

        render_frame(&mut full, &state).unwrap();
        render_preview(&mut preview, &state, NonZeroU32::new(1).unwrap()).unwrap();

        assert_eq!(full.data(), preview.data());
    }

    #[test]
    fn test_reduced_preview_fills_every_pixel() {
        let mut buffer = FrameBuffer::new(33, 17).unwrap();
        let state = RenderState {
            max_iterations: 48,
            ..RenderState::default()
        };

        render_preview(&mut buffer, &state, NonZeroU32::new(4).unwrap()).unwrap();

        for pixel in buffer.data().chunks_exact(BYTES_PER_PIXEL) {
            assert_eq!(pixel[3], u8::MAX);
        }
    }

    #[test]
    fn test_upscaled_pixels_repeat_source_blocks() {
        let mut preview = FrameBuffer::new(8, 8).unwrap();
        let state = RenderState {
            max_iterations: 48,
            ..RenderState::default()
        };

        render_preview(&mut preview, &state, NonZeroU32::new(2).unwrap()).unwrap();

        // With an exact factor of two, each 2x2 block repeats one source pixel.
        for y in (0..8).step_by(2) {
            for x in (0..8).step_by(2) {
                let anchor = preview.pixel(x, y).unwrap();

                assert_eq!(preview.pixel(x + 1, y).unwrap(), anchor);
                assert_eq!(preview.pixel(x, y + 1).unwrap(), anchor);
                assert_eq!(preview.pixel(x + 1, y + 1).unwrap(), anchor);
            }
        }
    }

    #[test]
    fn test_reduction_larger_than_frame_collapses_to_one_sample() {
        let mut buffer = FrameBuffer::new(4, 4).unwrap();
        let state = RenderState {
            max_iterations: 48,
            ..RenderState::default()
        };

        render_preview(&mut buffer, &state, NonZeroU32::new(16).unwrap()).unwrap();

        let anchor = buffer.pixel(0, 0).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(buffer.pixel(x, y).unwrap(), anchor);
            }
        }
    }

    #[test]
    fn test_invalid_state_is_rejected() {
        let mut buffer = FrameBuffer::new(8, 8).unwrap();
        let state = RenderState {
            viewport_height: -1.0,
            ..RenderState::default()
        };

        assert!(render_preview(&mut buffer, &state, NonZeroU32::new(2).unwrap()).is_err());
    }
}
