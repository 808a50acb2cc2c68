use crate::config::ViewerConfig;
use crate::core::data::pixel_buffer::SharedPixelBuffer;
use crate::core::data::viewport::{AtomicViewport, Viewport};
use crate::core::fractals::algorithms::{FractalAlgorithm, FractalAlgorithms};
use crate::core::fractals::colour_mapping::hue_rotation::HueRotationColourMap;
use crate::core::fractals::errors::AlgorithmError;
use crate::core::fractals::fractal_kinds::FractalKind;
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicU64, Ordering};

/// Render parameters and output shared by the dispatcher, every row worker
/// and the presenter.
///
/// Only the dispatcher writes the viewport and fractal. Workers read them at
/// the start of each pass; the gate handshake orders those reads after the
/// write that triggered the pass.
#[derive(Debug)]
pub struct RenderContext {
    pixels: SharedPixelBuffer,
    viewport: AtomicViewport,
    fractal: AtomicU8,
    running: AtomicBool,
    passes_completed: AtomicU64,
    algorithms: FractalAlgorithms,
    colour_map: HueRotationColourMap,
}

impl RenderContext {
    pub fn new(config: &ViewerConfig) -> Result<Self, AlgorithmError> {
        let fractal = config.initial_fractal;

        Ok(Self {
            pixels: SharedPixelBuffer::new(config.window_size, config.window_size),
            viewport: AtomicViewport::new(fractal.home_viewport()),
            fractal: AtomicU8::new(fractal.index()),
            running: AtomicBool::new(true),
            passes_completed: AtomicU64::new(0),
            algorithms: FractalAlgorithms::new(config.max_iterations)?,
            colour_map: HueRotationColourMap::new(config.max_iterations),
        })
    }

    #[must_use]
    pub fn pixels(&self) -> &SharedPixelBuffer {
        &self.pixels
    }

    #[must_use]
    pub fn window_size(&self) -> u32 {
        self.pixels.width()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport.load()
    }

    pub fn set_viewport(&self, viewport: Viewport) {
        self.viewport.store(viewport);
    }

    #[must_use]
    pub fn fractal(&self) -> FractalKind {
        FractalKind::from_index(self.fractal.load(Ordering::Relaxed)).unwrap_or_default()
    }

    pub fn set_fractal(&self, kind: FractalKind) {
        self.fractal.store(kind.index(), Ordering::Relaxed);
    }

    #[must_use]
    pub fn algorithm(&self, kind: FractalKind) -> &FractalAlgorithm {
        self.algorithms.get(kind)
    }

    #[must_use]
    pub fn colour_map(&self) -> &HueRotationColourMap {
        &self.colour_map
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.algorithms.max_iterations()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// Total band passes finished by all workers since start-up.
    #[must_use]
    pub fn passes_completed(&self) -> u64 {
        self.passes_completed.load(Ordering::Acquire)
    }

    pub fn record_pass(&self) {
        self.passes_completed.fetch_add(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_band::ports::escape_time::EscapeTimeAlgorithm;

    fn test_config() -> ViewerConfig {
        ViewerConfig {
            window_size: 16,
            max_iterations: 50,
            threads: 2,
            initial_fractal: FractalKind::BurningShip,
        }
    }

    #[test]
    fn test_new_starts_at_initial_fractal_home() {
        let context = RenderContext::new(&test_config()).unwrap();

        assert_eq!(context.fractal(), FractalKind::BurningShip);
        assert_eq!(context.viewport(), FractalKind::BurningShip.home_viewport());
        assert_eq!(context.window_size(), 16);
        assert_eq!(context.pixels().cells().len(), 256);
        assert_eq!(context.max_iterations(), 50);
        assert_eq!(context.colour_map().max_iterations(), 50);
        assert!(context.is_running());
        assert_eq!(context.passes_completed(), 0);
    }

    #[test]
    fn test_new_rejects_zero_iterations() {
        let config = ViewerConfig {
            max_iterations: 0,
            ..test_config()
        };

        assert_eq!(
            RenderContext::new(&config).unwrap_err(),
            AlgorithmError::ZeroMaxIterations
        );
    }

    #[test]
    fn test_set_fractal_selects_matching_algorithm() {
        let context = RenderContext::new(&test_config()).unwrap();

        context.set_fractal(FractalKind::Tricorn);

        assert_eq!(context.fractal(), FractalKind::Tricorn);
        assert_eq!(context.algorithm(context.fractal()).kind(), FractalKind::Tricorn);
        assert_eq!(context.algorithm(FractalKind::Tricorn).max_iterations(), 50);
    }

    #[test]
    fn test_set_viewport_is_visible_to_readers() {
        let context = RenderContext::new(&test_config()).unwrap();
        let zoomed = Viewport::new(-1.0, -0.5, 0.25, 0.25).unwrap();

        context.set_viewport(zoomed);

        assert_eq!(context.viewport(), zoomed);
    }

    #[test]
    fn test_stop_and_pass_counter() {
        let context = RenderContext::new(&test_config()).unwrap();

        context.record_pass();
        context.record_pass();
        context.stop();

        assert_eq!(context.passes_completed(), 2);
        assert!(!context.is_running());
    }
}
