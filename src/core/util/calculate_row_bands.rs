use crate::core::data::row_band::RowBand;
use std::num::NonZeroUsize;

/// Splits `[0, height)` into `bands` contiguous bands of `height / bands` rows.
/// The last band takes any remainder rows.
#[must_use]
pub fn calculate_row_bands(height: u32, bands: NonZeroUsize) -> Vec<RowBand> {
    let total_bands = u32::try_from(bands.get()).unwrap_or(u32::MAX);
    let band_height = height / total_bands;

    (0..total_bands)
        .map(|band_num| {
            let row_start = band_num * band_height;
            let row_end = if band_num == total_bands - 1 {
                height
            } else {
                (band_num + 1) * band_height
            };

            RowBand::new(row_start, row_end)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_exact_cover(height: u32, threads: usize) {
        let bands = calculate_row_bands(height, NonZeroUsize::new(threads).unwrap());
        let mut next_row = 0;

        assert_eq!(bands.len(), threads);

        for band in &bands {
            assert_eq!(
                band.row_start(),
                next_row,
                "gap or overlap at row {} for height {} and {} threads",
                next_row,
                height,
                threads
            );
            next_row = band.row_end();
        }

        assert_eq!(next_row, height);
    }

    #[test]
    fn test_even_split() {
        let bands = calculate_row_bands(800, NonZeroUsize::new(4).unwrap());

        assert_eq!(
            bands,
            vec![
                RowBand::new(0, 200),
                RowBand::new(200, 400),
                RowBand::new(400, 600),
                RowBand::new(600, 800),
            ]
        );
    }

    #[test]
    fn test_last_band_absorbs_remainder() {
        let bands = calculate_row_bands(10, NonZeroUsize::new(3).unwrap());

        assert_eq!(
            bands,
            vec![RowBand::new(0, 3), RowBand::new(3, 6), RowBand::new(6, 10)]
        );
    }

    #[test]
    fn test_single_band_covers_everything() {
        let bands = calculate_row_bands(7, NonZeroUsize::new(1).unwrap());

        assert_eq!(bands, vec![RowBand::new(0, 7)]);
    }

    #[test]
    fn test_more_bands_than_rows() {
        let bands = calculate_row_bands(2, NonZeroUsize::new(5).unwrap());

        assert!(bands[..4].iter().all(RowBand::is_empty));
        assert_eq!(bands[4], RowBand::new(0, 2));
    }

    #[test]
    fn test_bands_exactly_cover_height() {
        for height in [1, 2, 7, 99, 100, 600, 799, 800, 801] {
            for threads in 1..=9 {
                assert_exact_cover(height, threads);
            }
        }
    }
}
