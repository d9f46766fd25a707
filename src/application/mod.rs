pub mod use_cases;

pub use use_cases::soil_analysis::SoilAnalysisUseCase;
