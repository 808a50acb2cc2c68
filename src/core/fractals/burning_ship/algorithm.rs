use crate::core::actions::render_band::ports::escape_time::EscapeTimeAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::errors::AlgorithmError;
use crate::core::fractals::escape_time::escape_time;

/// Mandelbrot recurrence with the absolute value of the cross term:
/// `Im(z') = |2·Re(z)·Im(z)| + Im(c)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BurningShipAlgorithm {
    max_iterations: u32,
}

impl BurningShipAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, AlgorithmError> {
        if max_iterations == 0 {
            return Err(AlgorithmError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }
}

impl EscapeTimeAlgorithm for BurningShipAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn evaluate(&self, point: Complex) -> u32 {
        escape_time(point, self.max_iterations, |z| Complex {
            real: z.real * z.real - z.imag * z.imag + point.real,
            imag: (2.0 * z.real * z.imag).abs() + point.imag,
        })
    }
}
