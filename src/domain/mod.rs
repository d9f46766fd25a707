pub mod analysis_config;
pub mod error;
pub mod recommendation;
pub mod soil_field;
pub mod soil_reading;
