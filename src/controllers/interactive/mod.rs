//! Interactive controller for real-time fractal rendering.
//!
//! A fixed pool of row workers renders into a shared pixel buffer. The
//! controller dispatches redraws by updating the shared render context and
//! releasing each worker's gate; the presenter reads the buffer on its own
//! schedule.

pub mod commands;
mod controller;
pub mod errors;
pub mod render_context;
mod row_worker;

pub use commands::ViewerCommand;
pub use controller::InteractiveController;
pub use errors::ControllerError;
