// ============================================================
// ANALYSIS CONFIGURATION
// ============================================================
// Field labels, agronomic thresholds and input limits.
// Defaults reproduce the standard soil health card rules.

use serde::{Deserialize, Serialize};

use super::soil_field::{FieldCatalog, SoilField};

/// Label text used to locate each field in a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldLabels {
    pub ph: String,
    pub nitrogen: String,
    pub organic_carbon: String,
    pub zinc: String,
    pub iron: String,
    pub manganese: String,
    pub copper: String,
    pub boron: String,
}

impl Default for FieldLabels {
    fn default() -> Self {
        Self {
            ph: SoilField::Ph.default_label().to_string(),
            nitrogen: SoilField::Nitrogen.default_label().to_string(),
            organic_carbon: SoilField::OrganicCarbon.default_label().to_string(),
            zinc: SoilField::Zinc.default_label().to_string(),
            iron: SoilField::Iron.default_label().to_string(),
            manganese: SoilField::Manganese.default_label().to_string(),
            copper: SoilField::Copper.default_label().to_string(),
            boron: SoilField::Boron.default_label().to_string(),
        }
    }
}

impl FieldLabels {
    pub fn get(&self, field: SoilField) -> &str {
        match field {
            SoilField::Ph => &self.ph,
            SoilField::Nitrogen => &self.nitrogen,
            SoilField::OrganicCarbon => &self.organic_carbon,
            SoilField::Zinc => &self.zinc,
            SoilField::Iron => &self.iron,
            SoilField::Manganese => &self.manganese,
            SoilField::Copper => &self.copper,
            SoilField::Boron => &self.boron,
        }
    }
}

impl From<&FieldLabels> for FieldCatalog {
    fn from(labels: &FieldLabels) -> Self {
        FieldCatalog::from_labels(|field| labels.get(field).to_string())
    }
}

/// Threshold bands for the recommendation rules.
///
/// `*_below` bounds are exclusive, `*_above` bounds are exclusive and
/// `organic_carbon_high_from` is inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoilThresholds {
    pub ph_acidic_below: f64,
    pub ph_alkaline_above: f64,
    /// kg/ha
    pub nitrogen_low_below: f64,
    /// kg/ha
    pub nitrogen_high_above: f64,
    /// percent
    pub organic_carbon_low_below: f64,
    /// percent
    pub organic_carbon_high_from: f64,
    /// ppm
    pub zinc_low_below: f64,
    /// ppm
    pub iron_low_below: f64,
    /// ppm
    pub boron_low_below: f64,
}

impl Default for SoilThresholds {
    fn default() -> Self {
        Self {
            ph_acidic_below: 6.0,
            ph_alkaline_above: 7.5,
            nitrogen_low_below: 200.0,
            nitrogen_high_above: 500.0,
            organic_carbon_low_below: 0.5,
            organic_carbon_high_from: 0.75,
            zinc_low_below: 0.8,
            iron_low_below: 4.5,
            boron_low_below: 0.5,
        }
    }
}

impl SoilThresholds {
    pub fn validate(&self) -> Result<(), String> {
        let values = [
            ("ph_acidic_below", self.ph_acidic_below),
            ("ph_alkaline_above", self.ph_alkaline_above),
            ("nitrogen_low_below", self.nitrogen_low_below),
            ("nitrogen_high_above", self.nitrogen_high_above),
            ("organic_carbon_low_below", self.organic_carbon_low_below),
            ("organic_carbon_high_from", self.organic_carbon_high_from),
            ("zinc_low_below", self.zinc_low_below),
            ("iron_low_below", self.iron_low_below),
            ("boron_low_below", self.boron_low_below),
        ];
        if let Some((name, _)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("{} must be a finite number", name));
        }
        if self.ph_acidic_below > self.ph_alkaline_above {
            return Err("ph_acidic_below must be <= ph_alkaline_above".to_string());
        }
        if self.nitrogen_low_below > self.nitrogen_high_above {
            return Err("nitrogen_low_below must be <= nitrogen_high_above".to_string());
        }
        if self.organic_carbon_low_below > self.organic_carbon_high_from {
            return Err(
                "organic_carbon_low_below must be <= organic_carbon_high_from".to_string(),
            );
        }
        Ok(())
    }
}

/// Top-level configuration for the analysis pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub labels: FieldLabels,
    pub thresholds: SoilThresholds,

    /// Documents larger than this are rejected before decoding (default: 20 MiB)
    pub max_document_bytes: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            labels: FieldLabels::default(),
            thresholds: SoilThresholds::default(),
            max_document_bytes: 20 * 1024 * 1024,
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> FieldCatalog {
        FieldCatalog::from(&self.labels)
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(field) = SoilField::ALL
            .iter()
            .find(|&&field| self.labels.get(field).trim().is_empty())
        {
            return Err(format!("label for {} must not be empty", field));
        }
        if self.max_document_bytes == 0 {
            return Err("max_document_bytes must be > 0".to_string());
        }
        self.thresholds.validate()
    }
}
