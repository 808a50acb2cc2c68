pub mod calculate_row_bands;
pub mod scale_coordinate;
