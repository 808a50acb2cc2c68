use crate::core::actions::render_band::ports::colour_map::ColourMap;
use crate::core::actions::render_band::ports::escape_time::EscapeTimeAlgorithm;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::SharedPixelBuffer;
use crate::core::data::row_band::RowBand;
use crate::core::data::viewport::Viewport;
use crate::core::util::scale_coordinate::scale_coordinate;
use std::sync::atomic::Ordering;

/// Renders every pixel of `band` into `pixels` and returns the number of rows
/// written. Rows past the bottom of the buffer are skipped.
pub fn render_band<Alg, Map, Pack>(
    pixels: &SharedPixelBuffer,
    band: RowBand,
    viewport: &Viewport,
    algorithm: &Alg,
    colour_map: &Map,
    pack: Pack,
) -> u32
where
    Alg: EscapeTimeAlgorithm + ?Sized,
    Map: ColourMap + ?Sized,
    Pack: Fn(Colour) -> u32,
{
    let width = pixels.width();
    let height = pixels.height();
    let mut rows_rendered = 0;

    for row in band.rows_within(height) {
        let Some(cells) = pixels.row(row) else {
            break;
        };

        let imag = scale_coordinate(row, viewport.y(), viewport.height(), height);

        for (col, cell) in (0..width).zip(cells) {
            let real = scale_coordinate(col, viewport.x(), viewport.width(), width);
            let iterations = algorithm.evaluate(Complex { real, imag });

            cell.store(pack(colour_map.map(iterations)), Ordering::Relaxed);
        }

        rows_rendered += 1;
    }

    rows_rendered
}
