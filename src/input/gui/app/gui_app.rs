use crate::controllers::interactive::InteractiveController;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::util::scale_coordinate::pixel_to_complex;
use crate::input::gui::app::bindings::{InputAction, key_action, mouse_action};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiAppState;
use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::Window;

pub struct GuiApp<T: GuiPresenterPort> {
    presenter: T,
    pub controller: InteractiveController,
    state: GuiAppState,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        controller: InteractiveController,
    ) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            presenter,
            controller,
            state: GuiAppState::default(),
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter
            .render(self.controller.pixels(), egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.presenter.resize_surface(width, height) {
            log::warn!("failed to resize surface to {}x{}: {}", width, height, err);
        }
    }

    /// Applies an input action; returns false once the viewer should exit.
    pub fn apply(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::Viewer(command) => self.controller.handle(command),
            InputAction::ToggleOverlay => {
                self.state.toggle_overlay();
                true
            }
        }
    }

    pub fn on_keyboard_input(&mut self, event: &KeyEvent) -> bool {
        if event.state != ElementState::Pressed || event.repeat {
            return true;
        }

        let PhysicalKey::Code(key_code) = event.physical_key else {
            return true;
        };

        match key_action(key_code) {
            Some(action) => self.apply(action),
            None => true,
        }
    }

    pub fn on_mouse_input(&mut self, state: ElementState, button: MouseButton) -> bool {
        if state != ElementState::Pressed {
            return true;
        }

        match mouse_action(button, self.state.cursor) {
            Some(action) => self.apply(action),
            None => true,
        }
    }

    pub fn on_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.state.set_cursor(self.presenter.frame_pixel_at(position));
    }

    pub fn on_cursor_left(&mut self) {
        self.state.set_cursor(None);
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);

        self.egui_ctx.run(raw_input, |ctx| {
            if !self.state.overlay_visible {
                return;
            }

            let controller = &self.controller;
            let viewport = controller.viewport();
            let cursor = self
                .state
                .cursor
                .map(|(x, y)| pixel_to_complex(x, y, &viewport, controller.window_size()));

            egui::Window::new("Status")
                .default_pos([10.0, 10.0])
                .default_size([240.0, 200.0])
                .resizable(false)
                .show(ctx, |ui| {
                    ui.heading(controller.fractal().display_name());
                    ui.separator();

                    ui.label(format!(
                        "Real: [{:.6}, {:.6}]",
                        viewport.x(),
                        viewport.x() + viewport.width()
                    ));
                    ui.label(format!(
                        "Imag: [{:.6}, {:.6}]",
                        viewport.y(),
                        viewport.y() + viewport.height()
                    ));
                    if let Some(point) = cursor {
                        ui.label(format!("Cursor: {:.6} {:+.6}i", point.real, point.imag));
                    }
                    ui.label(format!("Max iterations: {}", controller.max_iterations()));
                    ui.label(format!("Colouring: {}", controller.colour_map_name()));
                    ui.label(format!("Render workers: {}", controller.worker_count()));
                    ui.label(format!("Band passes: {}", controller.passes_completed()));

                    ui.separator();
                    for (number, kind) in (1..).zip(FractalKind::ALL) {
                        ui.label(format!("{}: {}", number, kind.display_name()));
                    }
                    ui.label("Left/right click: zoom in/out");
                    ui.label("H: hide panel, Esc: quit");
                });
        })
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}
