//! GUI input adapter for interactive fractal viewing.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for framebuffer presentation, and egui for the status overlay.

pub mod app;
pub mod commands;
pub mod errors;
