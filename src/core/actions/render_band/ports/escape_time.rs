use crate::core::data::complex::Complex;

pub trait EscapeTimeAlgorithm {
    fn max_iterations(&self) -> u32;

    /// Iterations in `0..=max_iterations()` before `point` escapes radius 2.
    fn evaluate(&self, point: Complex) -> u32;
}
