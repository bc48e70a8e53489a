//! The scored health conditions.

use serde::{Deserialize, Serialize};

use crate::VitalsenseError;

/// One of the three conditions the pipeline scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    HeartDisease,
    Diabetes,
    Hypertension,
}

impl Condition {
    /// Canonical iteration order. Display, tie-breaking and artifact
    /// loading all follow this order.
    pub const ALL: [Condition; 3] = [
        Condition::HeartDisease,
        Condition::Diabetes,
        Condition::Hypertension,
    ];

    /// Snake-case id used for artifact file names and asset keys.
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Self::HeartDisease => "heart_disease",
            Self::Diabetes => "diabetes",
            Self::Hypertension => "hypertension",
        }
    }

    /// Human-readable name for display.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::HeartDisease => "Heart Disease",
            Self::Diabetes => "Diabetes",
            Self::Hypertension => "Hypertension",
        }
    }

    /// Number of features the condition's classifier consumes.
    #[must_use]
    pub fn feature_arity(&self) -> usize {
        match self {
            Self::HeartDisease => 14,
            Self::Diabetes => 10,
            Self::Hypertension => 13,
        }
    }

    /// Parse a condition id.
    ///
    /// # Errors
    /// Returns `VitalsenseError::UnknownCondition` for any id other than
    /// `heart_disease`, `diabetes` or `hypertension`.
    pub fn from_id(id: &str) -> Result<Self, VitalsenseError> {
        match id {
            "heart_disease" => Ok(Self::HeartDisease),
            "diabetes" => Ok(Self::Diabetes),
            "hypertension" => Ok(Self::Hypertension),
            other => Err(VitalsenseError::UnknownCondition(other.to_string())),
        }
    }

    /// Position in [`Condition::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            Self::HeartDisease => 0,
            Self::Diabetes => 1,
            Self::Hypertension => 2,
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
