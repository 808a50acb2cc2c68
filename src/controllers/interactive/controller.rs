use crate::config::ViewerConfig;
use crate::controllers::interactive::commands::ViewerCommand;
use crate::controllers::interactive::errors::ControllerError;
use crate::controllers::interactive::render_context::RenderContext;
use crate::controllers::interactive::row_worker::RowWorker;
use crate::core::actions::render_band::ports::colour_map::ColourMap;
use crate::core::actions::zoom_viewport::{ZOOM_IN_SCALE, ZOOM_OUT_SCALE, zoom_viewport};
use crate::core::data::pixel_buffer::SharedPixelBuffer;
use crate::core::data::row_band::RowBand;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::sync::gate::RenderGate;
use crate::core::util::calculate_row_bands::calculate_row_bands;
use std::sync::Arc;
use std::thread::JoinHandle;

struct WorkerHandle {
    band: RowBand,
    gate: Arc<RenderGate>,
    thread: Option<JoinHandle<()>>,
}

/// Owns the render worker pool and dispatches redraws to it.
///
/// Requests never wait for rendering: they update the shared parameters,
/// post every gate and return. The presenter shows whatever the buffer holds.
pub struct InteractiveController {
    context: Arc<RenderContext>,
    workers: Vec<WorkerHandle>,
}

impl InteractiveController {
    /// Spawns one worker per row band. Every gate starts posted, so the
    /// initial frame renders without an explicit request.
    pub fn new(config: &ViewerConfig) -> Result<Self, ControllerError> {
        config.validate()?;
        let threads = config.thread_count()?;
        let context = Arc::new(RenderContext::new(config)?);
        let bands = calculate_row_bands(config.window_size, threads);

        // On a spawn failure `controller` is dropped, which shuts down the
        // workers already running.
        let mut controller = Self {
            context,
            workers: Vec::with_capacity(bands.len()),
        };

        for (index, band) in bands.into_iter().enumerate() {
            let gate = Arc::new(RenderGate::new(true));
            let thread = RowWorker::new(
                index,
                band,
                Arc::clone(&gate),
                Arc::clone(&controller.context),
            )
            .spawn()
            .map_err(|source| ControllerError::SpawnWorker { index, source })?;

            controller.workers.push(WorkerHandle {
                band,
                gate,
                thread: Some(thread),
            });
        }

        log::info!(
            "started {} render workers for a {}x{} {} view",
            controller.workers.len(),
            config.window_size,
            config.window_size,
            config.initial_fractal
        );

        Ok(controller)
    }

    /// Stores whichever parameters are given and releases every worker once.
    pub fn request_redraw(&self, fractal: Option<FractalKind>, viewport: Option<Viewport>) {
        if let Some(kind) = fractal {
            self.context.set_fractal(kind);
        }

        if let Some(viewport) = viewport {
            self.context.set_viewport(viewport);
        }

        for worker in &self.workers {
            worker.gate.post();
        }

        log::debug!(
            "redraw dispatched to {} workers: {} at {:?}",
            self.workers.len(),
            self.context.fractal(),
            self.context.viewport()
        );
    }

    /// Switches to `kind` at its home viewport.
    pub fn select_fractal(&self, kind: FractalKind) {
        log::info!("switching to {}", kind);
        self.request_redraw(Some(kind), Some(kind.home_viewport()));
    }

    /// Zooms by `scale` around a window pixel and redraws. On error the
    /// current view is left untouched.
    pub fn zoom_at(&self, pixel_x: u32, pixel_y: u32, scale: f64) -> Result<Viewport, ViewportError> {
        let viewport = zoom_viewport(
            &self.context.viewport(),
            pixel_x,
            pixel_y,
            scale,
            self.context.window_size(),
        )?;

        log::debug!(
            "zoom x{} at pixel ({}, {}) -> {:?}",
            scale,
            pixel_x,
            pixel_y,
            viewport
        );
        self.request_redraw(None, Some(viewport));

        Ok(viewport)
    }

    /// Applies `command` and returns whether the viewer keeps running.
    pub fn handle(&mut self, command: ViewerCommand) -> bool {
        match command {
            ViewerCommand::SelectFractal(kind) => self.select_fractal(kind),
            ViewerCommand::ZoomIn { x, y } => self.zoom_or_warn(x, y, ZOOM_IN_SCALE),
            ViewerCommand::ZoomOut { x, y } => self.zoom_or_warn(x, y, ZOOM_OUT_SCALE),
            ViewerCommand::Quit => {
                self.shutdown();
                return false;
            }
        }

        true
    }

    fn zoom_or_warn(&self, x: u32, y: u32, scale: f64) {
        if let Err(err) = self.zoom_at(x, y, scale) {
            log::warn!("zoom ignored: {}", err);
        }
    }

    /// Clears the running flag, posts every gate, then joins every worker.
    /// Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.context.stop();

        for worker in &self.workers {
            worker.gate.post();
        }

        let mut joined = 0;
        for (index, worker) in self.workers.iter_mut().enumerate() {
            if let Some(thread) = worker.thread.take() {
                if thread.join().is_err() {
                    log::warn!("render worker {} panicked", index);
                }
                joined += 1;
            }
        }

        if joined > 0 {
            log::info!("stopped {} render workers", joined);
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.context.is_running()
    }

    #[must_use]
    pub fn pixels(&self) -> &SharedPixelBuffer {
        self.context.pixels()
    }

    #[must_use]
    pub fn fractal(&self) -> FractalKind {
        self.context.fractal()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.context.viewport()
    }

    #[must_use]
    pub fn window_size(&self) -> u32 {
        self.context.window_size()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.context.max_iterations()
    }

    #[must_use]
    pub fn colour_map_name(&self) -> &str {
        self.context.colour_map().display_name()
    }

    #[must_use]
    pub fn passes_completed(&self) -> u64 {
        self.context.passes_completed()
    }

    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    pub fn bands(&self) -> impl Iterator<Item = RowBand> + '_ {
        self.workers.iter().map(|worker| worker.band)
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
