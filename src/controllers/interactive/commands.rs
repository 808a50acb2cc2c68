use crate::core::fractals::fractal_kinds::FractalKind;

/// A user intent, already decoupled from whichever input device produced it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewerCommand {
    SelectFractal(FractalKind),
    /// Zoom in around a window pixel.
    ZoomIn { x: u32, y: u32 },
    /// Zoom out around a window pixel.
    ZoomOut { x: u32, y: u32 },
    Quit,
}
