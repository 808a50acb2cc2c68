use crate::core::actions::render_band::ports::escape_time::EscapeTimeAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::errors::AlgorithmError;
use crate::core::fractals::escape_time::escape_time;

/// `z' = z² + c`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, AlgorithmError> {
        if max_iterations == 0 {
            return Err(AlgorithmError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }
}

impl EscapeTimeAlgorithm for MandelbrotAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn evaluate(&self, point: Complex) -> u32 {
        escape_time(point, self.max_iterations, |z| z * z + point)
    }
}
