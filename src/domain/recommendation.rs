use serde::{Deserialize, Serialize};

pub const FALLBACK_PARAMETER: &str = "General";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Classification shown as the card title, e.g. "Soil pH (Acidic)"
    pub parameter: String,
    pub crops: Vec<String>,
    pub fertilizer_advice: String,
    pub irrigation: String,
    pub disease_risk: Option<String>,
}

impl Recommendation {
    pub fn is_fallback(&self) -> bool {
        self.parameter == FALLBACK_PARAMETER
    }
}

/// Recommendations in rule-evaluation order. Never empty once produced by
/// the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationSet(Vec<Recommendation>);

impl RecommendationSet {
    pub fn new(recommendations: Vec<Recommendation>) -> Self {
        Self(recommendations)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recommendation> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Recommendation] {
        &self.0
    }

    /// True when the set is only the generic fallback entry
    pub fn is_fallback(&self) -> bool {
        matches!(self.0.as_slice(), [only] if only.is_fallback())
    }

    pub fn parameters(&self) -> Vec<&str> {
        self.0.iter().map(|r| r.parameter.as_str()).collect()
    }

    pub fn into_vec(self) -> Vec<Recommendation> {
        self.0
    }
}

impl IntoIterator for RecommendationSet {
    type Item = Recommendation;
    type IntoIter = std::vec::IntoIter<Recommendation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecommendationSet {
    type Item = &'a Recommendation;
    type IntoIter = std::slice::Iter<'a, Recommendation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
