pub mod algorithms;
pub mod burning_ship;
pub mod colour_mapping;
pub mod errors;
mod escape_time;
pub mod fractal_kinds;
pub mod mandelbrot;
pub mod tricorn;
