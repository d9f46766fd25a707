use serde::{Deserialize, Serialize};

use super::soil_field::SoilField;

/// Per-field values parsed from one document.
///
/// A field that was not found is `None`. Absence is never encoded as a
/// number, so it cannot satisfy a threshold comparison downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilReading {
    ph: Option<f64>,
    nitrogen: Option<f64>,
    organic_carbon: Option<f64>,
    zinc: Option<f64>,
    iron: Option<f64>,
    manganese: Option<f64>,
    copper: Option<f64>,
    boron: Option<f64>,
}

impl SoilReading {
    /// Returns a copy with `field` set to `value`.
    pub fn with(mut self, field: SoilField, value: Option<f64>) -> Self {
        *self.slot_mut(field) = value;
        self
    }

    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = (SoilField, f64)>,
    {
        values
            .into_iter()
            .fold(Self::default(), |reading, (field, value)| {
                reading.with(field, Some(value))
            })
    }

    pub fn get(&self, field: SoilField) -> Option<f64> {
        match field {
            SoilField::Ph => self.ph,
            SoilField::Nitrogen => self.nitrogen,
            SoilField::OrganicCarbon => self.organic_carbon,
            SoilField::Zinc => self.zinc,
            SoilField::Iron => self.iron,
            SoilField::Manganese => self.manganese,
            SoilField::Copper => self.copper,
            SoilField::Boron => self.boron,
        }
    }

    fn slot_mut(&mut self, field: SoilField) -> &mut Option<f64> {
        match field {
            SoilField::Ph => &mut self.ph,
            SoilField::Nitrogen => &mut self.nitrogen,
            SoilField::OrganicCarbon => &mut self.organic_carbon,
            SoilField::Zinc => &mut self.zinc,
            SoilField::Iron => &mut self.iron,
            SoilField::Manganese => &mut self.manganese,
            SoilField::Copper => &mut self.copper,
            SoilField::Boron => &mut self.boron,
        }
    }

    pub fn ph(&self) -> Option<f64> {
        self.ph
    }

    pub fn nitrogen(&self) -> Option<f64> {
        self.nitrogen
    }

    pub fn organic_carbon(&self) -> Option<f64> {
        self.organic_carbon
    }

    pub fn zinc(&self) -> Option<f64> {
        self.zinc
    }

    pub fn iron(&self) -> Option<f64> {
        self.iron
    }

    pub fn manganese(&self) -> Option<f64> {
        self.manganese
    }

    pub fn copper(&self) -> Option<f64> {
        self.copper
    }

    pub fn boron(&self) -> Option<f64> {
        self.boron
    }

    /// Present fields in catalog order
    pub fn present(&self) -> impl Iterator<Item = (SoilField, f64)> + '_ {
        SoilField::ALL
            .iter()
            .filter_map(move |&field| self.get(field).map(|value| (field, value)))
    }

    pub fn missing_fields(&self) -> Vec<SoilField> {
        SoilField::ALL
            .iter()
            .copied()
            .filter(|&field| self.get(field).is_none())
            .collect()
    }

    pub fn coverage(&self) -> FieldCoverage {
        FieldCoverage {
            found: self.present().count(),
            total: SoilField::COUNT,
        }
    }
}

/// How many catalog fields a parse actually located
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldCoverage {
    pub found: usize,
    pub total: usize,
}

impl FieldCoverage {
    pub fn is_empty(&self) -> bool {
        self.found == 0
    }

    pub fn is_complete(&self) -> bool {
        self.found == self.total
    }
}
