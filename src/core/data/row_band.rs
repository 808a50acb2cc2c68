use std::ops::Range;

/// Contiguous scanlines owned by one render worker. `row_end` is exclusive.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RowBand {
    row_start: u32,
    row_end: u32,
}

impl RowBand {
    #[must_use]
    pub fn new(row_start: u32, row_end: u32) -> Self {
        Self {
            row_start,
            row_end: row_end.max(row_start),
        }
    }

    #[must_use]
    pub fn row_start(&self) -> u32 {
        self.row_start
    }

    #[must_use]
    pub fn row_end(&self) -> u32 {
        self.row_end
    }

    #[cfg(test)]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.row_end - self.row_start
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_start == self.row_end
    }

    /// Rows of this band that fall inside a buffer `height` rows tall.
    #[must_use]
    pub fn rows_within(&self, height: u32) -> Range<u32> {
        self.row_start.min(height)..self.row_end.min(height)
    }
}
