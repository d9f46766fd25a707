//! Soil parameters and the label catalog used to find them in report text

use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight parameters printed on a soil health card.
///
/// Declaration order is the catalog order used everywhere a reading is
/// listed or scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SoilField {
    Ph,
    Nitrogen,
    OrganicCarbon,
    Zinc,
    Iron,
    Manganese,
    Copper,
    Boron,
}

impl SoilField {
    pub const COUNT: usize = 8;

    pub const ALL: [SoilField; Self::COUNT] = [
        SoilField::Ph,
        SoilField::Nitrogen,
        SoilField::OrganicCarbon,
        SoilField::Zinc,
        SoilField::Iron,
        SoilField::Manganese,
        SoilField::Copper,
        SoilField::Boron,
    ];

    /// Canonical field name
    pub fn name(self) -> &'static str {
        match self {
            Self::Ph => "ph",
            Self::Nitrogen => "nitrogen",
            Self::OrganicCarbon => "organicCarbon",
            Self::Zinc => "zinc",
            Self::Iron => "iron",
            Self::Manganese => "manganese",
            Self::Copper => "copper",
            Self::Boron => "boron",
        }
    }

    /// Label text printed on standard soil health cards
    pub fn default_label(self) -> &'static str {
        match self {
            Self::Ph => "Soil pH",
            Self::Nitrogen => "Nitrogen",
            Self::OrganicCarbon => "Organic Carbon",
            Self::Zinc => "Zinc",
            Self::Iron => "Iron",
            Self::Manganese => "Manganese",
            Self::Copper => "Copper",
            Self::Boron => "Boron",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SoilField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for SoilField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoilField::ALL
            .iter()
            .copied()
            .find(|field| field.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown soil field: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCatalogEntry {
    pub field: SoilField,
    pub label: String,
}

/// Static pairing of every field to the label used to locate it.
///
/// Always holds exactly one entry per [`SoilField`], in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCatalog {
    entries: Vec<FieldCatalogEntry>,
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self::from_labels(|field| field.default_label().to_string())
    }
}

impl FieldCatalog {
    pub fn from_labels(mut label_for: impl FnMut(SoilField) -> String) -> Self {
        let entries = SoilField::ALL
            .iter()
            .map(|&field| FieldCatalogEntry {
                field,
                label: label_for(field),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[FieldCatalogEntry] {
        &self.entries
    }

    pub fn label(&self, field: SoilField) -> &str {
        &self.entries[field.index()].label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_catalog_labels() {
        let catalog = FieldCatalog::default();
        assert_eq!(catalog.entries().len(), SoilField::COUNT);
        assert_eq!(catalog.label(SoilField::Ph), "Soil pH");
        assert_eq!(catalog.label(SoilField::OrganicCarbon), "Organic Carbon");
        assert_eq!(catalog.label(SoilField::Boron), "Boron");
    }

    #[test]
    fn test_catalog_order_matches_field_order() {
        let catalog = FieldCatalog::default();
        let fields: Vec<SoilField> = catalog.entries().iter().map(|e| e.field).collect();
        assert_eq!(fields, SoilField::ALL.to_vec());
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!(SoilField::from_str("organicCarbon"), Ok(SoilField::OrganicCarbon));
        assert_eq!(SoilField::from_str("PH"), Ok(SoilField::Ph));
        assert!(SoilField::from_str("potassium").is_err());
    }
}
