use crate::adapters::pixel_format::copy_packed_to_rgba;
use crate::core::data::pixel_buffer::SharedPixelBuffer;
use crate::input::gui::app::bindings::frame_pixel;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use winit::dpi::PhysicalPosition;
use winit::window::Window;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    frame_size: u32,
    surface_width: u32,
    surface_height: u32,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(window: &'static Window, frame_size: u32) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        // The frame stays at the render resolution; pixels scales it onto the
        // surface if the window ends up a different physical size.
        let pixels = Pixels::new(frame_size, frame_size, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            frame_size,
            surface_width: size.width,
            surface_height: size.height,
        })
    }

    fn render(
        &mut self,
        frame: &SharedPixelBuffer,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.copy_frame(frame);

        self.pixels.render_with(|encoder, render_target, context| {
            // First, render the pixels framebuffer (the scaling pass)
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.surface_width, self.surface_height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            // Overlay on top of the fractal
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.pixels.resize_surface(width, height)?;
        self.surface_width = width;
        self.surface_height = height;
        Ok(())
    }

    fn frame_pixel_at(&self, position: PhysicalPosition<f64>) -> Option<(u32, u32)> {
        frame_pixel(
            self.pixels
                .window_pos_to_pixel((position.x as f32, position.y as f32)),
        )
    }
}

impl PixelsPresenter {
    /// Copies the shared buffer as it is right now; rows still being
    /// rendered show up partially updated.
    fn copy_frame(&mut self, frame: &SharedPixelBuffer) {
        if frame.width() != self.frame_size || frame.height() != self.frame_size {
            log::warn!(
                "skipping {}x{} frame for a {}x{} surface",
                frame.width(),
                frame.height(),
                self.frame_size,
                self.frame_size
            );
            return;
        }

        copy_packed_to_rgba(frame.cells(), self.pixels.frame_mut());
    }
}
