//! Soil health card analysis: flatten a text or PDF report, pull out the
//! labeled soil parameters and map them to crop and fertilizer guidance.

mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use crate::app::init_tracing;
pub use crate::application::use_cases::field_parser::{
    parse_fields, FieldLocator, FieldParser, LabelScanLocator,
};
pub use crate::application::use_cases::recommendation_engine::RecommendationEngine;
pub use crate::application::use_cases::soil_analysis::{
    ReportStatus, SoilAnalysisUseCase, SoilReport,
};
pub use crate::application::use_cases::text_extraction::{
    flatten_pages, ExtractedText, PagedSource, PdfPages, SoilDocument, TextExtractor,
};
pub use crate::domain::analysis_config::{AnalysisConfig, FieldLabels, SoilThresholds};
pub use crate::domain::error::{AppError, Result};
pub use crate::domain::recommendation::{Recommendation, RecommendationSet};
pub use crate::domain::soil_field::{FieldCatalog, FieldCatalogEntry, SoilField};
pub use crate::domain::soil_reading::{FieldCoverage, SoilReading};
pub use crate::infrastructure::config::ConfigService;
