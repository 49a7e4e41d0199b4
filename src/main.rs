const FRAME_WIDTH: u32 = 192 * 7;
const FRAME_HEIGHT: u32 = 108 * 7;
const FRAME_COUNT: u32 = 600;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    fractal_animator::animate_controller(FRAME_WIDTH, FRAME_HEIGHT, FRAME_COUNT, "output")?;

    Ok(())
}
