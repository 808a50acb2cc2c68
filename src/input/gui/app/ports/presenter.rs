use crate::core::data::pixel_buffer::SharedPixelBuffer;
use egui::Context as EguiContext;
use winit::dpi::PhysicalPosition;
use winit::window::Window;

pub trait GuiPresenterPort: Sized {
    /// Creates a surface over `window` backed by a square frame of
    /// `frame_size` pixels.
    fn new(window: &'static Window, frame_size: u32) -> Result<Self, pixels::Error>;
    fn render(
        &mut self,
        frame: &SharedPixelBuffer,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;
    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
    /// Frame pixel drawn under a physical window position, or `None` when
    /// the position falls outside the scaled frame.
    fn frame_pixel_at(&self, position: PhysicalPosition<f64>) -> Option<(u32, u32)>;
}
