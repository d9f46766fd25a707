//! Threshold rules mapping a soil reading to crop, fertilizer, irrigation
//! and disease-risk guidance.
//!
//! Rules are evaluated per field in a fixed order: pH, nitrogen, organic
//! carbon, zinc, iron, boron. Each field contributes at most one
//! recommendation. Manganese and copper are parsed but have no rules yet.

use tracing::{debug, info};

use crate::domain::analysis_config::SoilThresholds;
use crate::domain::recommendation::{Recommendation, RecommendationSet, FALLBACK_PARAMETER};
use crate::domain::soil_reading::SoilReading;

type Rule = fn(&SoilThresholds, &SoilReading) -> Option<Recommendation>;

const RULES: [(&str, Rule); 6] = [
    ("ph", ph_rule),
    ("nitrogen", nitrogen_rule),
    ("organicCarbon", organic_carbon_rule),
    ("zinc", zinc_rule),
    ("iron", iron_rule),
    ("boron", boron_rule),
];

#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    thresholds: SoilThresholds,
}

impl RecommendationEngine {
    pub fn new(thresholds: SoilThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &SoilThresholds {
        &self.thresholds
    }

    /// Absent fields never trigger a rule. When nothing fires the result is
    /// the single "General" fallback.
    pub fn analyze(&self, reading: &SoilReading) -> RecommendationSet {
        let mut recommendations = Vec::new();

        for (name, rule) in RULES.iter() {
            if let Some(rec) = rule(&self.thresholds, reading) {
                debug!(field = *name, parameter = %rec.parameter, "Rule fired");
                recommendations.push(rec);
            }
        }

        if recommendations.is_empty() {
            info!("No threshold rule fired, using general recommendation");
            recommendations.push(fallback());
        }

        RecommendationSet::new(recommendations)
    }
}

fn recommendation(
    parameter: &str,
    crops: &[&str],
    fertilizer_advice: &str,
    irrigation: &str,
    disease_risk: Option<&str>,
) -> Recommendation {
    Recommendation {
        parameter: parameter.to_string(),
        crops: crops.iter().map(|c| c.to_string()).collect(),
        fertilizer_advice: fertilizer_advice.to_string(),
        irrigation: irrigation.to_string(),
        disease_risk: disease_risk.map(str::to_string),
    }
}

fn fallback() -> Recommendation {
    recommendation(
        FALLBACK_PARAMETER,
        &["Wheat", "Rice", "Maize"],
        "Soil looks healthy. Follow a balanced NPK schedule as per crop requirement.",
        "Irrigate according to crop stage and local rainfall.",
        None,
    )
}

fn ph_rule(t: &SoilThresholds, reading: &SoilReading) -> Option<Recommendation> {
    let ph = reading.ph()?;
    let rec = if ph < t.ph_acidic_below {
        recommendation(
            "Soil pH (Acidic)",
            &["Potato", "Tea", "Pineapple", "Sweet Potato"],
            "Apply agricultural lime to raise soil pH before sowing.",
            "Use light, frequent irrigation and avoid waterlogging.",
            Some("Higher risk of fungal root rot in acidic, wet soils."),
        )
    } else if ph > t.ph_alkaline_above {
        recommendation(
            "Soil pH (Alkaline)",
            &["Barley", "Cotton", "Sorghum", "Mustard"],
            "Apply gypsum along with well-decomposed organic manure.",
            "Irrigate with good quality water and ensure drainage to leach salts.",
            Some("Risk of micronutrient deficiencies (iron, zinc) in alkaline soils."),
        )
    } else {
        recommendation(
            "Soil pH (Neutral)",
            &["Wheat", "Rice", "Maize", "Pulses", "Vegetables"],
            "Maintain a balanced NPK fertilizer schedule.",
            "Follow the normal irrigation schedule for the crop.",
            None,
        )
    };
    Some(rec)
}

fn nitrogen_rule(t: &SoilThresholds, reading: &SoilReading) -> Option<Recommendation> {
    let nitrogen = reading.nitrogen()?;
    if nitrogen < t.nitrogen_low_below {
        Some(recommendation(
            "Nitrogen (Low)",
            &["Rice", "Wheat", "Maize", "Sugarcane"],
            "Apply urea in split doses: at sowing, tillering and flowering.",
            "Irrigate soon after each urea dose to reduce volatilization losses.",
            Some("Nitrogen deficiency causes chlorosis (yellowing of older leaves)."),
        ))
    } else if nitrogen > t.nitrogen_high_above {
        Some(recommendation(
            "Nitrogen (High)",
            &["Leafy Vegetables", "Maize", "Banana"],
            "Reduce or skip nitrogen fertilizer for this season.",
            "Avoid over-irrigation to limit nitrate leaching.",
            Some("Excess nitrogen increases lodging and aphid infestation."),
        ))
    } else {
        None
    }
}

fn organic_carbon_rule(t: &SoilThresholds, reading: &SoilReading) -> Option<Recommendation> {
    let carbon = reading.organic_carbon()?;
    if carbon < t.organic_carbon_low_below {
        Some(recommendation(
            "Organic Carbon (Low)",
            &["Pulses", "Groundnut", "Soybean"],
            "Add compost or farmyard manure to build organic matter.",
            "Mulch to conserve moisture; low-carbon soils dry out quickly.",
            Some("Poor soil structure raises the risk of wilt diseases."),
        ))
    } else if carbon >= t.organic_carbon_high_from {
        Some(recommendation(
            "Organic Carbon (High)",
            &["Rice", "Vegetables", "Sugarcane"],
            "Retain crop residues and grow green manure to maintain organic matter.",
            "Soil holds moisture well; irrigate less frequently.",
            None,
        ))
    } else {
        None
    }
}

fn zinc_rule(t: &SoilThresholds, reading: &SoilReading) -> Option<Recommendation> {
    let zinc = reading.zinc()?;
    (zinc < t.zinc_low_below).then(|| {
        recommendation(
            "Zinc (Low)",
            &["Maize", "Wheat", "Sugarcane"],
            "Apply zinc sulphate at 25 kg/ha as a basal dose.",
            "Maintain regular irrigation; zinc uptake drops in dry soil.",
            Some("Zinc deficiency causes Khaira disease in rice."),
        )
    })
}

fn iron_rule(t: &SoilThresholds, reading: &SoilReading) -> Option<Recommendation> {
    let iron = reading.iron()?;
    (iron < t.iron_low_below).then(|| {
        recommendation(
            "Iron (Low)",
            &["Rice", "Groundnut", "Soybean"],
            "Apply ferrous sulphate as a foliar spray (0.5%).",
            "Avoid prolonged waterlogging followed by drying.",
            Some("Iron deficiency causes interveinal chlorosis in young leaves."),
        )
    })
}

fn boron_rule(t: &SoilThresholds, reading: &SoilReading) -> Option<Recommendation> {
    let boron = reading.boron()?;
    (boron < t.boron_low_below).then(|| {
        recommendation(
            "Boron (Low)",
            &["Cauliflower", "Mustard", "Sunflower"],
            "Apply borax at 10 kg/ha to the soil before sowing.",
            "Keep soil moisture steady during flowering.",
            Some("Boron deficiency causes hollow stem and flower drop."),
        )
    })
}
