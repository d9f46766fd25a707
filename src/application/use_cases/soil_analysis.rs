use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::application::use_cases::field_parser::FieldParser;
use crate::application::use_cases::recommendation_engine::RecommendationEngine;
use crate::application::use_cases::text_extraction::{SoilDocument, TextExtractor};
use crate::domain::analysis_config::AnalysisConfig;
use crate::domain::error::{AppError, Result};
use crate::domain::recommendation::RecommendationSet;
use crate::domain::soil_reading::{FieldCoverage, SoilReading};

pub const NO_VALUES_MESSAGE: &str =
    "Could not extract any soil values. Please upload a valid Soil Health Card.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportStatus {
    /// Every catalog field was found
    Complete,
    /// Some fields were found
    Partial,
    /// Nothing usable; the recommendations are only the generic fallback
    NoValuesFound,
}

/// Result of one analysis, handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilReport {
    pub reading: SoilReading,
    pub coverage: FieldCoverage,
    pub recommendations: RecommendationSet,
}

impl SoilReport {
    pub fn status(&self) -> ReportStatus {
        if self.coverage.is_empty() {
            ReportStatus::NoValuesFound
        } else if self.coverage.is_complete() {
            ReportStatus::Complete
        } else {
            ReportStatus::Partial
        }
    }

    /// Message to show instead of the recommendations, if any
    pub fn user_message(&self) -> Option<&'static str> {
        match self.status() {
            ReportStatus::NoValuesFound => Some(NO_VALUES_MESSAGE),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| AppError::Internal(format!("Failed to serialize report: {}", e)))
    }
}

/// Extract → parse → recommend
#[derive(Clone)]
pub struct SoilAnalysisUseCase {
    extractor: TextExtractor,
    parser: FieldParser,
    engine: RecommendationEngine,
}

impl Default for SoilAnalysisUseCase {
    fn default() -> Self {
        let config = AnalysisConfig::default();
        Self {
            extractor: TextExtractor::new(config.max_document_bytes),
            parser: FieldParser::default(),
            engine: RecommendationEngine::new(config.thresholds),
        }
    }
}

impl SoilAnalysisUseCase {
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        config.validate().map_err(|e| {
            AppError::ValidationError(format!("Invalid analysis config: {}", e))
        })?;

        Ok(Self {
            extractor: TextExtractor::new(config.max_document_bytes),
            parser: FieldParser::new(&config.catalog())?,
            engine: RecommendationEngine::new(config.thresholds.clone()),
        })
    }

    pub fn analyze_document(&self, document: &SoilDocument) -> Result<SoilReport> {
        let extracted = self.extractor.extract(document)?;
        if extracted.is_blank() {
            warn!(kind = document.kind(), "Document yielded no text");
            return Err(AppError::NoExtractableText);
        }
        Ok(self.analyze_text(&extracted.text))
    }

    /// Runs parse and recommend on already-extracted text
    pub fn analyze_text(&self, text: &str) -> SoilReport {
        let reading = self.parser.parse(text);
        let coverage = reading.coverage();
        let recommendations = self.engine.analyze(&reading);

        if coverage.is_empty() {
            warn!("No soil values found in document");
        }
        info!(
            fields_found = coverage.found,
            fields_total = coverage.total,
            recommendations = recommendations.len(),
            "Soil analysis complete"
        );

        SoilReport {
            reading,
            coverage,
            recommendations,
        }
    }

    pub fn analyze_file(&self, path: &Path) -> Result<SoilReport> {
        info!(path = %path.display(), "Analyzing soil report file");
        let document = SoilDocument::from_path(path)?;
        self.analyze_document(&document)
    }

    /// Runs [`analyze_file`](Self::analyze_file) on the blocking pool so a
    /// UI thread is never stalled by PDF decoding.
    pub async fn analyze_file_in_background(self: Arc<Self>, path: PathBuf) -> Result<SoilReport> {
        tokio::task::spawn_blocking(move || self.analyze_file(&path))
            .await
            .map_err(|e| AppError::Internal(format!("Analysis task failed: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::soil_field::SoilField;

    fn analyze(text: &str) -> Result<SoilReport> {
        SoilAnalysisUseCase::default()
            .analyze_document(&SoilDocument::PlainText(text.as_bytes().to_vec()))
    }

    #[test]
    fn test_mixed_separator_scenario() {
        let report = analyze("Soil pH: 5.8, Nitrogen 650, Organic Carbon 0.3").unwrap();
        assert_eq!(
            report.recommendations.parameters(),
            vec!["Soil pH (Acidic)", "Nitrogen (High)", "Organic Carbon (Low)"]
        );
        assert_eq!(report.coverage.found, 3);
        assert_eq!(report.status(), ReportStatus::Partial);
        assert_eq!(report.user_message(), None);
    }

    #[test]
    fn test_no_space_after_colon_scenario() {
        let report = analyze("Soil pH:6.8\nZinc 0.5").unwrap();
        assert_eq!(
            report.recommendations.parameters(),
            vec!["Soil pH (Neutral)", "Zinc (Low)"]
        );
    }

    #[test]
    fn test_source_order_does_not_affect_output_order() {
        let report = analyze("Boron 0.2\nZinc 0.1\nSoil pH 8.0").unwrap();
        assert_eq!(
            report.recommendations.parameters(),
            vec!["Soil pH (Alkaline)", "Zinc (Low)", "Boron (Low)"]
        );
    }

    #[test]
    fn test_empty_document_is_reported_before_rules() {
        assert_eq!(analyze("").unwrap_err(), AppError::NoExtractableText);
        assert_eq!(analyze(" \n\t ").unwrap_err(), AppError::NoExtractableText);
    }

    #[test]
    fn test_unreadable_text_gets_fallback_and_message() {
        let report = analyze("Quarterly invoice, total 1200").unwrap();
        assert_eq!(report.coverage.found, 0);
        assert!(report.recommendations.is_fallback());
        assert_eq!(report.status(), ReportStatus::NoValuesFound);
        assert_eq!(report.user_message(), Some(NO_VALUES_MESSAGE));
    }

    #[test]
    fn test_complete_card_status() {
        let text = "Soil pH 6.5 Nitrogen 250 Organic Carbon 0.6 Zinc 1.0 \
                    Iron 5.0 Manganese 2.0 Copper 0.4 Boron 0.7";
        let report = analyze(text).unwrap();
        assert_eq!(report.status(), ReportStatus::Complete);
        assert_eq!(report.recommendations.parameters(), vec!["Soil pH (Neutral)"]);
        assert_eq!(report.reading.get(SoilField::Copper), Some(0.4));
    }

    #[test]
    fn test_unsupported_document() {
        let err = SoilAnalysisUseCase::default()
            .analyze_document(&SoilDocument::Unsupported("xlsx".to_string()))
            .unwrap_err();
        assert_eq!(err, AppError::UnsupportedFormat("xlsx".to_string()));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = AnalysisConfig::default();
        config.labels.iron = String::new();
        assert!(matches!(
            SoilAnalysisUseCase::new(&config),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_configured_labels_and_thresholds() {
        let mut config = AnalysisConfig::default();
        config.labels.nitrogen = "Available Nitrogen".to_string();
        config.thresholds.nitrogen_low_below = 300.0;
        let use_case = SoilAnalysisUseCase::new(&config).unwrap();
        let report = use_case.analyze_text("Available Nitrogen: 250");
        assert_eq!(report.recommendations.parameters(), vec!["Nitrogen (Low)"]);
    }

    #[test]
    fn test_report_serializes_for_presentation() {
        let report = analyze("Zinc 0.5").unwrap();
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["coverage"]["found"], 1);
        assert_eq!(json["recommendations"][0]["parameter"], "Zinc (Low)");
        assert!(json["reading"]["ph"].is_null());
    }

    #[tokio::test]
    async fn test_analyze_file_in_background() {
        let dir = std::env::temp_dir().join("soil_insight_background");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("card.txt");
        std::fs::write(&path, "Soil pH: 6.8\nIron 3.0").unwrap();

        let use_case = Arc::new(SoilAnalysisUseCase::default());
        let report = use_case.analyze_file_in_background(path).await.unwrap();
        assert_eq!(
            report.recommendations.parameters(),
            vec!["Soil pH (Neutral)", "Iron (Low)"]
        );
    }
}
