use crate::core::actions::render_band::ports::escape_time::EscapeTimeAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::burning_ship::algorithm::BurningShipAlgorithm;
use crate::core::fractals::errors::AlgorithmError;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::tricorn::algorithm::TricornAlgorithm;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FractalAlgorithm {
    Mandelbrot(MandelbrotAlgorithm),
    BurningShip(BurningShipAlgorithm),
    Tricorn(TricornAlgorithm),
}

impl FractalAlgorithm {
    pub fn new(kind: FractalKind, max_iterations: u32) -> Result<Self, AlgorithmError> {
        Ok(match kind {
            FractalKind::Mandelbrot => Self::Mandelbrot(MandelbrotAlgorithm::new(max_iterations)?),
            FractalKind::BurningShip => {
                Self::BurningShip(BurningShipAlgorithm::new(max_iterations)?)
            }
            FractalKind::Tricorn => Self::Tricorn(TricornAlgorithm::new(max_iterations)?),
        })
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        match self {
            Self::Mandelbrot(_) => FractalKind::Mandelbrot,
            Self::BurningShip(_) => FractalKind::BurningShip,
            Self::Tricorn(_) => FractalKind::Tricorn,
        }
    }
}

impl EscapeTimeAlgorithm for FractalAlgorithm {
    fn max_iterations(&self) -> u32 {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.max_iterations(),
            Self::BurningShip(algorithm) => algorithm.max_iterations(),
            Self::Tricorn(algorithm) => algorithm.max_iterations(),
        }
    }

    #[inline]
    fn evaluate(&self, point: Complex) -> u32 {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.evaluate(point),
            Self::BurningShip(algorithm) => algorithm.evaluate(point),
            Self::Tricorn(algorithm) => algorithm.evaluate(point),
        }
    }
}

/// One ready-built algorithm per fractal kind, indexed by `FractalKind`.
#[derive(Debug, Clone)]
pub struct FractalAlgorithms {
    table: [FractalAlgorithm; 3],
}

impl FractalAlgorithms {
    pub fn new(max_iterations: u32) -> Result<Self, AlgorithmError> {
        Ok(Self {
            table: [
                FractalAlgorithm::new(FractalKind::Mandelbrot, max_iterations)?,
                FractalAlgorithm::new(FractalKind::BurningShip, max_iterations)?,
                FractalAlgorithm::new(FractalKind::Tricorn, max_iterations)?,
            ],
        })
    }

    #[must_use]
    pub fn get(&self, kind: FractalKind) -> &FractalAlgorithm {
        &self.table[usize::from(kind.index())]
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.table[0].max_iterations()
    }
}
