pub mod bindings;
pub mod gui_app;
pub mod ports;
pub mod state;
