use crate::core::data::viewport::Viewport;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    BurningShip,
    Tricorn,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::BurningShip, Self::Tricorn];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::BurningShip => "Burning Ship",
            Self::Tricorn => "Tricorn",
        }
    }

    /// Viewport shown when the fractal is first selected.
    #[must_use]
    pub fn home_viewport(self) -> Viewport {
        let (x, y, w, h) = match self {
            Self::Mandelbrot => (-2.0, -1.5, 3.0, 3.0),
            Self::BurningShip => (-2.0, -2.5, 3.0, 4.0),
            Self::Tricorn => (-2.0, -2.5, 4.0, 4.0),
        };

        Viewport::new(x, y, w, h).expect("home viewports have positive extents")
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Mandelbrot => 0,
            Self::BurningShip => 1,
            Self::Tricorn => 2,
        }
    }

    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Mandelbrot),
            1 => Some(Self::BurningShip),
            2 => Some(Self::Tricorn),
            _ => None,
        }
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}
