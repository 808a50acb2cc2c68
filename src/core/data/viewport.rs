#[cfg(test)]
use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSize { width: f64, height: f64 },
    NonFinite { x: f64, y: f64, width: f64, height: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "viewport size must be positive: {}x{}",
                    width, height
                )
            }
            Self::NonFinite {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "viewport must be finite: origin ({}, {}), size {}x{}",
                    x, y, width, height
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// Rectangle of the complex plane mapped onto the pixel buffer.
///
/// `x`/`y` is the corner drawn at pixel (0, 0); `w`/`h` extend towards
/// increasing pixel coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl Viewport {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Result<Self, ViewportError> {
        // Negated comparison so NaN extents are rejected too.
        if !(w > 0.0 && h > 0.0) {
            return Err(ViewportError::InvalidSize {
                width: w,
                height: h,
            });
        }

        if ![x, y, w, h].iter().all(|value| value.is_finite()) {
            return Err(ViewportError::NonFinite {
                x,
                y,
                width: w,
                height: h,
            });
        }

        Ok(Self { x, y, w, h })
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.w
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.h
    }

    #[cfg(test)]
    #[must_use]
    pub fn centre(&self) -> Complex {
        Complex {
            real: self.x + self.w * 0.5,
            imag: self.y + self.h * 0.5,
        }
    }
}

/// Viewport shared between the dispatcher and the render workers.
///
/// Each field is its own atomic, so a reader racing a store can see a mix of
/// old and new fields. Every stored extent is positive, so a mixed view is
/// still a valid viewport; the next pass picks up the consistent one.
#[derive(Debug)]
pub struct AtomicViewport {
    x: AtomicU64,
    y: AtomicU64,
    w: AtomicU64,
    h: AtomicU64,
}

impl AtomicViewport {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            x: AtomicU64::new(viewport.x.to_bits()),
            y: AtomicU64::new(viewport.y.to_bits()),
            w: AtomicU64::new(viewport.w.to_bits()),
            h: AtomicU64::new(viewport.h.to_bits()),
        }
    }

    #[must_use]
    pub fn load(&self) -> Viewport {
        Viewport {
            x: f64::from_bits(self.x.load(Ordering::Relaxed)),
            y: f64::from_bits(self.y.load(Ordering::Relaxed)),
            w: f64::from_bits(self.w.load(Ordering::Relaxed)),
            h: f64::from_bits(self.h.load(Ordering::Relaxed)),
        }
    }

    pub fn store(&self, viewport: Viewport) {
        self.x.store(viewport.x.to_bits(), Ordering::Relaxed);
        self.y.store(viewport.y.to_bits(), Ordering::Relaxed);
        self.w.store(viewport.w.to_bits(), Ordering::Relaxed);
        self.h.store(viewport.h.to_bits(), Ordering::Relaxed);
    }
}
