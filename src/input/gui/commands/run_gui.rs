use crate::config::ViewerConfig;
use crate::controllers::interactive::InteractiveController;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;
use std::marker::PhantomData;
use std::time::{Duration, Instant};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

/// Interval between presentations of the shared buffer.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ViewerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ViewerConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Runs the viewer until the window closes or Escape is pressed.
    pub fn execute(&self) -> Result<(), GuiError> {
        self.config.validate()?;
        let window_size = self.config.window_size;

        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Fractal Viewer")
                .with_inner_size(PhysicalSize::new(window_size, window_size))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window, window_size)?;
        let controller = InteractiveController::new(&self.config)?;
        let mut app = GuiApp::new(window, &event_loop, presenter, controller);
        let mut next_frame = Instant::now();
        let mut render_error = None;

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                // Forward event to egui first
                let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);

                if egui_repaint {
                    window.request_redraw();
                }

                let keep_running = match event {
                    WindowEvent::CloseRequested => false,
                    WindowEvent::RedrawRequested => {
                        let egui_output = app.update_ui(window);

                        app.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        match app.render(egui_output) {
                            Ok(()) => true,
                            Err(err) => {
                                render_error = Some(err);
                                false
                            }
                        }
                    }
                    WindowEvent::KeyboardInput { event, .. } if !egui_consumed => {
                        app.on_keyboard_input(event)
                    }
                    WindowEvent::MouseInput { state, button, .. } if !egui_consumed => {
                        app.on_mouse_input(*state, *button)
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        app.on_cursor_moved(*position);
                        true
                    }
                    WindowEvent::CursorLeft { .. } => {
                        app.on_cursor_left();
                        true
                    }
                    WindowEvent::Resized(size) => {
                        app.resize(size.width, size.height);
                        true
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        app.resize(size.width, size.height);
                        true
                    }
                    _ => true,
                };

                if !keep_running {
                    app.controller.shutdown();
                    elwt.exit();
                }
            }
            Event::AboutToWait => {
                // Workers finish on their own schedule, so present periodically.
                let now = Instant::now();
                if now >= next_frame {
                    window.request_redraw();
                    next_frame = now + FRAME_INTERVAL;
                }
                elwt.set_control_flow(ControlFlow::WaitUntil(next_frame));
            }
            _ => {}
        })?;

        match render_error {
            Some(err) => Err(GuiError::Surface(err)),
            None => Ok(()),
        }
    }
}
