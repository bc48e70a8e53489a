//! Medical knowledge base: risk factors, prevention tips and symptoms.
//!
//! Human-authored content shipped as an immutable JSON asset. The crate
//! treats it as data, not logic: it is deserialized once and never
//! recomputed.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::Condition;

const KNOWLEDGE_JSON: &str = include_str!("../../assets/knowledge.json");

/// Knowledge entries for one condition.
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionKnowledge {
    pub risk_factors: Vec<String>,
    pub prevention: Vec<String>,
    pub symptoms: Vec<String>,
}

/// Per-condition medical knowledge, keyed by condition id.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeBase {
    entries: HashMap<String, ConditionKnowledge>,
}

impl KnowledgeBase {
    /// Parse the embedded asset.
    ///
    /// # Errors
    /// Returns a serialization error if the embedded asset is malformed.
    pub fn embedded() -> Result<Self, serde_json::Error> {
        Self::from_json(KNOWLEDGE_JSON)
    }

    /// Parse a caller-supplied knowledge table.
    ///
    /// # Errors
    /// Returns a serialization error if `json` is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Knowledge for one condition, if the asset covers it.
    #[must_use]
    pub fn get(&self, condition: Condition) -> Option<&ConditionKnowledge> {
        self.entries.get(condition.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_asset_covers_all_conditions() {
        let kb = KnowledgeBase::embedded().expect("embedded asset parses");
        for condition in Condition::ALL {
            let entry = kb.get(condition).expect("entry present");
            assert!(!entry.risk_factors.is_empty());
            assert!(!entry.prevention.is_empty());
            assert!(!entry.symptoms.is_empty());
        }
    }

    #[test]
    fn test_known_content_spot_checks() {
        let kb = KnowledgeBase::embedded().unwrap();
        let heart = kb.get(Condition::HeartDisease).unwrap();
        assert_eq!(heart.symptoms[0], "Chest pain or discomfort");
        assert_eq!(heart.prevention.len(), 7);

        let hypertension = kb.get(Condition::Hypertension).unwrap();
        assert_eq!(hypertension.symptoms[0], "Often no symptoms (silent killer)");
    }

    #[test]
    fn test_missing_condition_yields_none() {
        let kb = KnowledgeBase::from_json(r#"{"diabetes": {"risk_factors": ["x"], "prevention": ["y"], "symptoms": ["z"]}}"#)
            .unwrap();
        assert!(kb.get(Condition::HeartDisease).is_none());
        assert!(kb.get(Condition::Diabetes).is_some());
    }
}
