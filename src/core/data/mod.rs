pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod row_band;
pub mod viewport;
