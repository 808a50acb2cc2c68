use crate::core::data::complex::Complex;

/// Runs `step` from `z0 = c` until the orbit leaves the radius-2 circle or
/// `max_iterations` steps have been taken.
#[inline]
pub(crate) fn escape_time(c: Complex, max_iterations: u32, step: impl Fn(Complex) -> Complex) -> u32 {
    let mut z = c;
    let mut iterations = 0;

    while iterations < max_iterations && z.is_bounded() {
        z = step(z);
        iterations += 1;
    }

    iterations
}
