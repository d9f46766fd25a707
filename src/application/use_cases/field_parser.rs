use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::domain::error::{AppError, Result};
use crate::domain::soil_field::{FieldCatalog, SoilField};
use crate::domain::soil_reading::SoilReading;

/// Numeric token accepted after a label: unsigned integer or decimal
const NUMBER_PATTERN: &str = r"([0-9]+(?:\.[0-9]+)?)";

static DEFAULT_LOCATOR: Lazy<Arc<LabelScanLocator>> = Lazy::new(|| {
    Arc::new(LabelScanLocator::new(&FieldCatalog::default()).unwrap())
});

/// Strategy for finding one field's value in document text
pub trait FieldLocator: Send + Sync {
    fn locate(&self, text: &str, field: SoilField) -> Option<f64>;
}

/// Finds the first `<label>` followed by a run of colons/whitespace and a
/// number. Labels match case-sensitively, exactly as declared.
#[derive(Debug, Clone)]
pub struct LabelScanLocator {
    patterns: Vec<(SoilField, Regex)>,
}

impl LabelScanLocator {
    pub fn new(catalog: &FieldCatalog) -> Result<Self> {
        let patterns = catalog
            .entries()
            .iter()
            .map(|entry| {
                let pattern = format!(r"{}[:\s]+{}", regex::escape(&entry.label), NUMBER_PATTERN);
                Regex::new(&pattern)
                    .map(|re| (entry.field, re))
                    .map_err(|e| {
                        AppError::Internal(format!(
                            "Invalid pattern for label '{}': {}",
                            entry.label, e
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }
}

impl FieldLocator for LabelScanLocator {
    fn locate(&self, text: &str, field: SoilField) -> Option<f64> {
        let (_, pattern) = self.patterns.iter().find(|(f, _)| *f == field)?;
        // captures() returns the leftmost match, so later repeats are ignored
        let captures = pattern.captures(text)?;
        captures.get(1)?.as_str().parse::<f64>().ok()
    }
}

/// Turns report text into a [`SoilReading`]
#[derive(Clone)]
pub struct FieldParser {
    locator: Arc<dyn FieldLocator>,
}

impl Default for FieldParser {
    fn default() -> Self {
        Self {
            locator: DEFAULT_LOCATOR.clone(),
        }
    }
}

impl FieldParser {
    pub fn new(catalog: &FieldCatalog) -> Result<Self> {
        Ok(Self::with_locator(Arc::new(LabelScanLocator::new(catalog)?)))
    }

    pub fn with_locator(locator: Arc<dyn FieldLocator>) -> Self {
        Self { locator }
    }

    /// Every field ends up either present or explicitly absent
    pub fn parse(&self, text: &str) -> SoilReading {
        let reading = SoilField::ALL.iter().fold(SoilReading::default(), |reading, &field| {
            reading.with(field, self.locator.locate(text, field))
        });

        debug!(
            found = reading.coverage().found,
            missing = ?reading.missing_fields(),
            "Parsed soil fields"
        );
        reading
    }
}

/// One-shot parse with a label-scan over `catalog`
pub fn parse_fields(text: &str, catalog: &FieldCatalog) -> Result<SoilReading> {
    Ok(FieldParser::new(catalog)?.parse(text))
}
