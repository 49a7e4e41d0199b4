use crate::core::data::complex::Complex;
use crate::core::fractals::variant::FractalVariant;
use std::error::Error;
use std::fmt;

/// Output frames are 16:9 regardless of zoom; the viewport width is always
/// derived from the height.
pub const ASPECT_RATIO: f64 = 16.0 / 9.0;

pub const DEFAULT_VIEWPORT_X: f64 = -0.5;
pub const DEFAULT_VIEWPORT_Y: f64 = 0.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 3.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderStateError {
    NonPositiveViewportHeight { viewport_height: f64 },
    ZeroMaxIterations,
}

impl fmt::Display for RenderStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveViewportHeight { viewport_height } => {
                write!(
                    f,
                    "viewport height must be positive and finite: {}",
                    viewport_height
                )
            }
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for RenderStateError {}

/// Snapshot of everything one frame needs. Callers mutate a copy between
/// frames; a render call only ever borrows it immutably.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    pub viewport_x: f64,
    pub viewport_y: f64,
    pub viewport_height: f64,
    pub max_iterations: u32,
    pub colour_density: f64,
    pub show_julia: bool,
    pub julia_seed: Complex,
    pub colour_scheme: usize,
    pub auto_iterations: bool,
    pub variant: FractalVariant,
    pub stripes: bool,
    pub stripe_frequency: f64,
    pub stripe_intensity: f64,
    pub inner_colouring: bool,
    pub anti_aliasing: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            viewport_x: DEFAULT_VIEWPORT_X,
            viewport_y: DEFAULT_VIEWPORT_Y,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            max_iterations: 128,
            colour_density: 0.2,
            show_julia: false,
            julia_seed: Complex {
                real: -0.8,
                imag: 0.156,
            },
            colour_scheme: 0,
            auto_iterations: true,
            variant: FractalVariant::Mandelbrot,
            stripes: false,
            stripe_frequency: 5.0,
            stripe_intensity: 10.0,
            inner_colouring: false,
            anti_aliasing: false,
        }
    }
}

impl RenderState {
    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        self.viewport_height * ASPECT_RATIO
    }

    pub fn validate(&self) -> Result<(), RenderStateError> {
        if !(self.viewport_height > 0.0) || !self.viewport_height.is_finite() {
            return Err(RenderStateError::NonPositiveViewportHeight {
                viewport_height: self.viewport_height,
            });
        }

        if self.max_iterations == 0 {
            return Err(RenderStateError::ZeroMaxIterations);
        }

        Ok(())
    }
}
