//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no external service
//! dependencies. All types are serializable and carry strict validation.

mod assessment;
mod chat;
mod condition;
mod profile;

pub use assessment::{AssessmentSet, ModelMetrics, RiskAssessment, RiskLevel};
pub use chat::{ChatHistory, ChatTurn, DISPLAYED_TURNS};
pub use condition::Condition;
pub use profile::{
    AlcoholUse, CurrentCondition, ExerciseFrequency, FamilyCondition, Gender, PatientProfile,
    SmokingStatus,
};
