use crate::adapters::pixel_format::pack_rgb;
use crate::controllers::interactive::render_context::RenderContext;
use crate::core::actions::render_band::render_band::render_band;
use crate::core::data::row_band::RowBand;
use crate::core::sync::gate::RenderGate;
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

/// Long-lived render thread owning one band of scanlines.
///
/// Idle while blocked on its gate, rendering after each release, and gone
/// once it is released with the running flag cleared.
pub struct RowWorker {
    index: usize,
    band: RowBand,
    gate: Arc<RenderGate>,
    context: Arc<RenderContext>,
}

impl RowWorker {
    #[must_use]
    pub fn new(
        index: usize,
        band: RowBand,
        gate: Arc<RenderGate>,
        context: Arc<RenderContext>,
    ) -> Self {
        Self {
            index,
            band,
            gate,
            context,
        }
    }

    #[must_use]
    pub fn thread_name(index: usize) -> String {
        format!("render-worker-{index}")
    }

    pub fn spawn(self) -> io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name(Self::thread_name(self.index))
            .spawn(move || self.run())
    }

    pub fn run(self) {
        loop {
            self.gate.wait();

            if !self.context.is_running() {
                log::debug!("render worker {} stopping", self.index);
                return;
            }

            self.render_pass();
        }
    }

    /// Renders the band once with whatever fractal and viewport are current.
    pub fn render_pass(&self) -> u32 {
        let context = &self.context;
        let fractal = context.fractal();
        let viewport = context.viewport();

        let start = Instant::now();
        let rows = render_band(
            context.pixels(),
            self.band,
            &viewport,
            context.algorithm(fractal),
            context.colour_map(),
            pack_rgb,
        );
        context.record_pass();

        log::trace!(
            "worker {} rendered rows {}..{} of {} in {:?}",
            self.index,
            self.band.row_start(),
            self.band.row_start() + rows,
            fractal,
            start.elapsed()
        );

        rows
    }
}
