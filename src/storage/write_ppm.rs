use crate::core::data::frame_buffer::{FrameBuffer, BYTES_PER_PIXEL};
use std::io::Write;
use std::path::Path;

/// Writes the frame as binary PPM. The format carries RGB only, so the
/// alpha byte of each pixel is dropped.
pub fn write_ppm(buffer: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", buffer.width(), buffer.height())?;
    writeln!(file, "255")?;

    let pixel_count = buffer.width() as usize * buffer.height() as usize;
    let mut rgb = Vec::with_capacity(pixel_count * 3);
    for pixel in buffer.data().chunks_exact(BYTES_PER_PIXEL) {
        rgb.extend_from_slice(&pixel[..3]);
    }
    file.write_all(&rgb)?;

    Ok(())
}
