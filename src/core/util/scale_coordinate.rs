use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// Maps pixel `pixel` along one axis of a `window_size` wide window onto the
/// viewport axis starting at `origin` and spanning `extent`.
#[inline]
#[must_use]
pub fn scale_coordinate(pixel: u32, origin: f64, extent: f64, window_size: u32) -> f64 {
    origin + extent * f64::from(pixel) / f64::from(window_size)
}

#[inline]
#[must_use]
pub fn pixel_to_complex(col: u32, row: u32, viewport: &Viewport, window_size: u32) -> Complex {
    Complex {
        real: scale_coordinate(col, viewport.x(), viewport.width(), window_size),
        imag: scale_coordinate(row, viewport.y(), viewport.height(), window_size),
    }
}
