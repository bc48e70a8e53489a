//! # Vitalsense
//!
//! Health risk scoring and advisory core.
//!
//! Given a user-supplied health profile, this crate produces per-condition
//! risk probabilities (heart disease, diabetes, hypertension) using
//! pre-trained classifier artifacts, derives a three-tier risk label,
//! selects static recommendation lists, and answers free-text questions
//! via a keyword-matched canned-response router.
//!
//! Prediction is delegated entirely to externally trained classifiers;
//! this crate owns the deterministic remapping of a profile into each
//! model's fixed-order feature vector and the rule-based routing around
//! the results. It provides educational information only and never makes
//! diagnostic claims.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (PatientProfile, RiskAssessment, chat transcript)
//! - `ports`: Trait definitions for the classifier and scaler seams
//! - `adapters`: Concrete implementations (JSON artifacts, synthetic fallback, registry)
//! - `application`: Use cases orchestrating domain and ports

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub use application::{ChatResponder, RiskEngine, Session};
pub use domain::{Condition, PatientProfile, RiskAssessment, RiskLevel};

/// Result type for vitalsense operations
pub type Result<T> = std::result::Result<T, VitalsenseError>;

/// Main error type for vitalsense
#[derive(Debug, thiserror::Error)]
pub enum VitalsenseError {
    /// No classifier is registered for the condition. Callers skip the
    /// condition; this is never fatal for the other conditions.
    #[error("no model registered for {0}")]
    ModelUnavailable(domain::Condition),

    /// The profile could not be mapped to the condition's feature schema.
    /// Callers skip the condition's assessment and report to the user.
    #[error("feature mapping failed for {condition}: {reason}")]
    FeatureMapping {
        condition: domain::Condition,
        reason: String,
    },

    /// An id outside the three known conditions reached the crate.
    #[error("unknown condition id: {0}")]
    UnknownCondition(String),

    #[error("model artifact error: {0}")]
    Artifact(#[from] adapters::ArtifactError),

    #[error("model evaluation failed: {0}")]
    Model(#[from] ports::ModelError),

    #[error("invalid patient data: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
