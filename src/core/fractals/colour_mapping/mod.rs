pub mod hue_rotation;
