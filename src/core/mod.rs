pub mod actions;
pub mod data;
pub mod fractals;
pub mod sync;
pub mod util;
