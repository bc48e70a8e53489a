//! Risk assessment result types.
//!
//! Represents the output of one condition's classifier after thresholding.

use serde::{Deserialize, Serialize};

use super::condition::Condition;

/// Risk tier derived from a probability threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// p < 0.30
    Low,
    /// 0.30 <= p < 0.60
    Moderate,
    /// p >= 0.60
    High,
}

impl RiskLevel {
    /// Tier for a positive-class probability. Boundaries are exact:
    /// 0.30 is Moderate, 0.60 is High.
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability < 0.3 {
            Self::Low
        } else if probability < 0.6 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Fixed display color (hex) for this tier.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Self::Low => "#4CAF50",      // green
            Self::Moderate => "#FF9800", // amber
            Self::High => "#F44336",     // red
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low risk - No significant indicators",
            Self::Moderate => "Moderate risk - Follow-up recommended",
            Self::High => "High risk - Immediate consultation advised",
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one condition's classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Positive-class probability (0.0 to 1.0)
    pub probability: f64,

    /// Risk tier derived from the probability
    pub risk_level: RiskLevel,

    /// Confidence score: max(p, 1 - p)
    pub confidence: f64,
}

impl RiskAssessment {
    /// Create an assessment from a raw probability.
    ///
    /// The probability is clamped into [0, 1] before thresholding.
    #[must_use]
    pub fn new(probability: f64) -> Self {
        let probability = probability.clamp(0.0, 1.0);
        Self {
            probability,
            risk_level: RiskLevel::from_probability(probability),
            confidence: probability.max(1.0 - probability),
        }
    }

    /// Display color of the assessment's tier.
    #[must_use]
    pub fn color(&self) -> &'static str {
        self.risk_level.color()
    }
}

/// Reported performance metrics of a registered model.
///
/// These come from the training pipeline (or the demo fallback); the crate
/// reports them, it never computes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub model_name: String,
    pub accuracy: f64,
    pub auc: f64,
}

/// Latest per-condition assessments, iterated in [`Condition::ALL`] order.
///
/// Created fresh on each analysis and held in session state until the next
/// analysis. Conditions whose classification was skipped are simply absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessmentSet {
    slots: [Option<RiskAssessment>; 3],
}

impl AssessmentSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, condition: Condition, assessment: RiskAssessment) {
        self.slots[condition.index()] = Some(assessment);
    }

    #[must_use]
    pub fn get(&self, condition: Condition) -> Option<&RiskAssessment> {
        self.slots[condition.index()].as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Present assessments in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Condition, &RiskAssessment)> {
        Condition::ALL
            .into_iter()
            .filter_map(move |condition| self.get(condition).map(|a| (condition, a)))
    }

    /// The condition with the highest probability.
    ///
    /// Ties resolve to the first entry in [`Condition::ALL`] order, so the
    /// result is stable across calls. Returns `None` when no assessments
    /// exist.
    #[must_use]
    pub fn max_probability(&self) -> Option<(Condition, &RiskAssessment)> {
        let mut best: Option<(Condition, &RiskAssessment)> = None;
        for (condition, assessment) in self.iter() {
            match best {
                Some((_, current)) if assessment.probability <= current.probability => {}
                _ => best = Some((condition, assessment)),
            }
        }
        best
    }
}
