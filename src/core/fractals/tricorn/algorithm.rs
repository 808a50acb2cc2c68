use crate::core::actions::render_band::ports::escape_time::EscapeTimeAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::errors::AlgorithmError;
use crate::core::fractals::escape_time::escape_time;

/// Conjugate recurrence `z' = conj(z)² + c`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TricornAlgorithm {
    max_iterations: u32,
}

impl TricornAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, AlgorithmError> {
        if max_iterations == 0 {
            return Err(AlgorithmError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }
}

impl EscapeTimeAlgorithm for TricornAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn evaluate(&self, point: Complex) -> u32 {
        escape_time(point, self.max_iterations, |z| {
            let conj = z.conj();
            conj * conj + point
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(real: f64, imag: f64) -> Complex {
        Complex { real, imag }
    }

    #[test]
    fn test_zero_max_iterations_rejected() {
        assert_eq!(
            TricornAlgorithm::new(0),
            Err(AlgorithmError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_origin_never_escapes() {
        let algorithm = TricornAlgorithm::new(400).unwrap();

        assert_eq!(algorithm.evaluate(point(0.0, 0.0)), 400);
    }

    #[test]
    fn test_points_outside_radius_escape_immediately() {
        let algorithm = TricornAlgorithm::new(400).unwrap();

        assert_eq!(algorithm.evaluate(point(-2.0, 0.0)), 0);
        assert_eq!(algorithm.evaluate(point(0.0, 2.5)), 0);
    }

    #[test]
    fn test_sign_flipped_cross_term() {
        let algorithm = TricornAlgorithm::new(400).unwrap();

        assert_eq!(algorithm.evaluate(point(0.5, 0.5)), 6);
        assert_eq!(algorithm.evaluate(point(-0.5, 0.5)), 3);
        // Escapes after 14 steps under Mandelbrot, bounded here.
        assert_eq!(algorithm.evaluate(point(0.3, 0.6)), 400);
    }
}
