use std::sync::atomic::AtomicU32;
#[cfg(test)]
use std::sync::atomic::Ordering;

/// Row-major grid of packed colours written concurrently by the render
/// workers and read by the presenter.
///
/// Cells are relaxed atomics: workers own disjoint rows, and a reader may see
/// any mix of old and new passes, which is an accepted torn frame.
#[derive(Debug)]
pub struct SharedPixelBuffer {
    width: u32,
    height: u32,
    cells: Box<[AtomicU32]>,
}

impl SharedPixelBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let cells = (0..(width as usize * height as usize))
            .map(|_| AtomicU32::new(0))
            .collect();

        Self {
            width,
            height,
            cells,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn cells(&self) -> &[AtomicU32] {
        &self.cells
    }

    /// The cells of one scanline, or `None` past the last row.
    #[must_use]
    pub fn row(&self, row: u32) -> Option<&[AtomicU32]> {
        if row >= self.height {
            return None;
        }

        let start = row as usize * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Packed colour at (`col`, `row`), or `None` outside the buffer.
    #[cfg(test)]
    pub fn pixel(&self, col: u32, row: u32) -> Option<u32> {
        let cells = self.row(row)?;
        cells.get(col as usize).map(|cell| cell.load(Ordering::Relaxed))
    }
}
