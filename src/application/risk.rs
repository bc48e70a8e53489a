//! Risk engine: feature mapping + scaling + classification.
//!
//! Orchestrates the per-condition pipeline: map the profile into the
//! condition's feature schema, standardize if a scaler is registered, and
//! apply the classifier. Per-condition failures are isolated.

use crate::adapters::ModelRegistry;
use crate::application::features::map_features;
use crate::domain::{AssessmentSet, Condition, PatientProfile, RiskAssessment};
use crate::{Result, VitalsenseError};

/// Applies the registered models to a patient profile.
pub struct RiskEngine {
    registry: ModelRegistry,
}

impl RiskEngine {
    #[must_use]
    pub fn new(registry: ModelRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Classify one condition.
    ///
    /// # Errors
    /// Returns `ModelUnavailable` if no classifier is registered for the
    /// condition and `FeatureMapping` if the profile cannot be mapped.
    /// Callers treat both as "skip this condition", never as fatal.
    pub fn classify(
        &self,
        profile: &PatientProfile,
        condition: Condition,
    ) -> Result<RiskAssessment> {
        let classifier = self
            .registry
            .classifier(condition)
            .ok_or(VitalsenseError::ModelUnavailable(condition))?;

        let mut features = map_features(profile, condition)?;
        if let Some(scaler) = self.registry.scaler(condition) {
            features = scaler.transform(&features);
        }

        let probability = classifier.predict_probability(&features)?;
        let assessment = RiskAssessment::new(probability);

        tracing::debug!(
            "{}: probability={:.4}, risk={}, confidence={:.1}%",
            condition.id(),
            assessment.probability,
            assessment.risk_level,
            assessment.confidence * 100.0
        );
        Ok(assessment)
    }

    /// Assess all three conditions for one profile.
    ///
    /// One condition failing never prevents the others from producing a
    /// result; failures are logged and the condition is absent from the
    /// returned set.
    #[must_use]
    pub fn assess_all(&self, profile: &PatientProfile) -> AssessmentSet {
        let mut set = AssessmentSet::new();
        for condition in Condition::ALL {
            match self.classify(profile, condition) {
                Ok(assessment) => set.insert(condition, assessment),
                Err(err) => tracing::warn!("Skipping {}: {err}", condition.id()),
            }
        }
        set
    }
}
