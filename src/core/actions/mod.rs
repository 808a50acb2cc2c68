pub mod render_band;
pub mod zoom_viewport;
