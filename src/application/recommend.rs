//! Recommendation selection: static advice tables keyed by condition and
//! risk tier.
//!
//! The tables are domain content, not derived logic. They ship verbatim as
//! an immutable JSON asset; selection is a pure lookup.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::{Condition, RiskLevel};

const RECOMMENDATIONS_JSON: &str = include_str!("../../assets/recommendations.json");

/// Immutable advice table: 3 conditions x 3 risk tiers, each an ordered
/// list of human-authored guidance strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Recommendations {
    table: HashMap<String, HashMap<String, Vec<String>>>,
}

impl Recommendations {
    /// Parse the embedded asset.
    ///
    /// # Errors
    /// Returns a serialization error if the embedded asset is malformed.
    pub fn embedded() -> Result<Self, serde_json::Error> {
        Self::from_json(RECOMMENDATIONS_JSON)
    }

    /// Parse a caller-supplied advice table.
    ///
    /// # Errors
    /// Returns a serialization error if `json` is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Ordered advice for a (condition, tier) pair.
    ///
    /// A pure lookup: identical inputs always return the identical list,
    /// and pairs absent from the asset yield an empty slice.
    #[must_use]
    pub fn for_risk(&self, condition: Condition, level: RiskLevel) -> &[String] {
        self.table
            .get(condition.id())
            .and_then(|tiers| tiers.get(level.as_str()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pair_is_populated() {
        let recs = Recommendations::embedded().expect("embedded asset parses");
        for condition in Condition::ALL {
            for level in [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High] {
                let advice = recs.for_risk(condition, level);
                assert!(
                    (4..=7).contains(&advice.len()),
                    "{condition} {level} has {} entries",
                    advice.len()
                );
            }
        }
    }

    #[test]
    fn test_lookup_is_pure() {
        let recs = Recommendations::embedded().unwrap();
        let first = recs.for_risk(Condition::Diabetes, RiskLevel::High).to_vec();
        let second = recs.for_risk(Condition::Diabetes, RiskLevel::High).to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_high_risk_heart_disease_content() {
        let recs = Recommendations::embedded().unwrap();
        let advice = recs.for_risk(Condition::HeartDisease, RiskLevel::High);
        assert_eq!(advice.len(), 7);
        assert!(advice[0].contains("cardiologist"));
    }

    #[test]
    fn test_missing_pair_yields_empty_slice() {
        let recs =
            Recommendations::from_json(r#"{"diabetes": {"High": ["see a doctor"]}}"#).unwrap();
        assert!(recs.for_risk(Condition::Diabetes, RiskLevel::Low).is_empty());
        assert!(recs
            .for_risk(Condition::HeartDisease, RiskLevel::High)
            .is_empty());
        assert_eq!(recs.for_risk(Condition::Diabetes, RiskLevel::High).len(), 1);
    }
}
