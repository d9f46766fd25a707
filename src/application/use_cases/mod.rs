pub mod field_parser;
pub mod recommendation_engine;
pub mod soil_analysis;
pub mod text_extraction;
