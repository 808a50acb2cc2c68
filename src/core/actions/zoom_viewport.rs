use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::util::scale_coordinate::scale_coordinate;

pub const ZOOM_IN_SCALE: f64 = 0.5;
pub const ZOOM_OUT_SCALE: f64 = 2.0;

/// Rescales `viewport` by `scale` around the plane point under
/// (`pixel_x`, `pixel_y`), which becomes the centre of the new viewport.
///
/// Both axes are computed from the viewport as it was before the zoom.
/// Fails when the new extent is not positive, e.g. a non-positive `scale` or
/// an extent that has underflowed after very deep zooming, and when zooming
/// out has overflowed the extent or origin to a non-finite value.
pub fn zoom_viewport(
    viewport: &Viewport,
    pixel_x: u32,
    pixel_y: u32,
    scale: f64,
    window_size: u32,
) -> Result<Viewport, ViewportError> {
    let width = viewport.width() * scale;
    let height = viewport.height() * scale;

    let x = scale_coordinate(pixel_x, viewport.x(), viewport.width(), window_size) - width * 0.5;
    let y = scale_coordinate(pixel_y, viewport.y(), viewport.height(), window_size) - height * 0.5;

    Viewport::new(x, y, width, height)
}
