//! Input adapters for the fractal viewer.
//!
//! These receive input from the command line or the window and translate it
//! into configuration and viewer commands.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
