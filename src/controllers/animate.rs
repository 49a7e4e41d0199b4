use std::error::Error;
use std::path::Path;
use std::time::Instant;

use log::info;

use crate::core::actions::adjust_iterations::adjust_iterations;
use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::render_state::RenderState;
use crate::storage::write_ppm::write_ppm;

/// Where a rendered flight through the set is headed: the camera eases
/// towards these targets a fixed fraction per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPath {
    pub target_x: f64,
    pub target_y: f64,
    pub target_height: f64,
    pub target_colour_density: f64,
    pub target_iterations: u32,
    /// Divisor for the centre coordinates; 1 snaps the pan immediately.
    pub pan_divisor: f64,
    /// Divisor for height, colour density and the iteration cap.
    pub ease_divisor: f64,
}

impl Default for CameraPath {
    fn default() -> Self {
        // Deep dive onto the needle west of the set
        Self {
            target_x: -1.711_028_760_647_010_482_642_826_9,
            target_y: 0.000_310_929_737_969_808_136_881_2,
            target_height: 0.000_000_000_000_170_530_256_582_4,
            target_colour_density: 0.018_692_767_247_557_640_075_683_6,
            target_iterations: 1941,
            pan_divisor: 1.0,
            ease_divisor: 25.0,
        }
    }
}

/// Owns the camera path and the frame counter; steps the render state one
/// animation frame at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationDriver {
    path: CameraPath,
    frame: u32,
}

impl AnimationDriver {
    #[must_use]
    pub fn new(path: CameraPath) -> Self {
        Self { path, frame: 0 }
    }

    #[must_use]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Eases the state towards the path targets and advances the frame
    /// counter. Returns the number of frames stepped so far.
    pub fn step(&mut self, state: &mut RenderState) -> u32 {
        let path = &self.path;

        state.viewport_x += (path.target_x - state.viewport_x) / path.pan_divisor;
        state.viewport_y += (path.target_y - state.viewport_y) / path.pan_divisor;
        state.viewport_height += (path.target_height - state.viewport_height) / path.ease_divisor;
        state.colour_density +=
            (path.target_colour_density - state.colour_density) / path.ease_divisor;

        // The iteration cap eases in integer steps, truncated towards zero;
        // it settles once the gap drops below one divisor's worth.
        let divisor = (path.ease_divisor as i64).max(1);
        let gap = i64::from(path.target_iterations) - i64::from(state.max_iterations);
        state.max_iterations = (i64::from(state.max_iterations) + gap / divisor) as u32;

        self.frame += 1;
        self.frame
    }
}

/// Renders an animation along the default camera path, writing one numbered
/// PPM file per frame.
pub fn animate_controller(
    width: u32,
    height: u32,
    frames: u32,
    out_dir: impl AsRef<Path>,
) -> Result<(), Box<dyn Error>> {
    let out_dir = out_dir.as_ref();
    std::fs::create_dir_all(out_dir)?;

    let mut buffer = FrameBuffer::new(width, height)?;
    let mut state = RenderState::default();
    adjust_iterations(&mut state);

    // The driver owns the cap from here on
    let mut driver = AnimationDriver::new(CameraPath::default());

    info!("animating {} frames at {}x{}", frames, width, height);

    for _ in 0..frames {
        let frame = driver.frame();
        let start = Instant::now();
        render_frame(&mut buffer, &state)?;
        info!("frame {} rendered in {:?}", frame, start.elapsed());

        write_ppm(&buffer, out_dir.join(format!("{}.ppm", frame)))?;
        driver.step(&mut state);
    }

    Ok(())
}
