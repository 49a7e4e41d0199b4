#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalVariant {
    #[default]
    Mandelbrot,
    BurningShip,
}

impl FractalVariant {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::BurningShip];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::BurningShip => "Burning Ship",
        }
    }
}
