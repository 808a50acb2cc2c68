pub mod adapters;
pub mod config;
pub mod controllers;
pub mod core;
pub mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use crate::config::{ConfigError, ViewerConfig};
pub use crate::controllers::interactive::{ControllerError, InteractiveController, ViewerCommand};
pub use crate::core::data::pixel_buffer::SharedPixelBuffer;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::fractal_kinds::FractalKind;
pub use crate::input::cli::args::ViewerArgs;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::input::gui::errors::GuiError;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
