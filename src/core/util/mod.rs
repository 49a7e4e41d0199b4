pub mod calculate_bands_for_height;
pub mod calculate_workers_for_banding;
pub mod sample_to_complex;
