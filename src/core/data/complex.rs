use std::ops::{Add, Mul};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn conj(self) -> Self {
        Self {
            real: self.real,
            imag: -self.imag,
        }
    }

    /// True while the point is still inside the radius-2 escape circle.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.magnitude_squared() < 4.0
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        let c = Complex {
            real: -3.0,
            imag: 4.0,
        };
        assert_eq!(c.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_conj_flips_imaginary_sign() {
        let c = Complex {
            real: 1.5,
            imag: -2.0,
        };
        assert_eq!(
            c.conj(),
            Complex {
                real: 1.5,
                imag: 2.0
            }
        );
    }

    #[test]
    fn test_is_bounded_excludes_escape_circle() {
        assert!(Complex { real: 1.0, imag: 1.0 }.is_bounded());
        assert!(!Complex { real: 2.0, imag: 0.0 }.is_bounded());
        assert!(!Complex { real: 0.0, imag: -2.5 }.is_bounded());
    }

    #[test]
    fn test_square() {
        // (2 + 3i)² = 4 + 12i + 9i² = -5 + 12i
        let c = Complex {
            real: 2.0,
            imag: 3.0,
        };
        let result = c * c;
        assert_eq!(result.real, -5.0);
        assert_eq!(result.imag, 12.0);
    }

    #[test]
    fn test_add() {
        let a = Complex {
            real: 1.0,
            imag: 2.0,
        };
        let b = Complex {
            real: -3.0,
            imag: -7.0,
        };
        let result = a + b;
        assert_eq!(result.real, -2.0);
        assert_eq!(result.imag, -5.0);
    }
}
