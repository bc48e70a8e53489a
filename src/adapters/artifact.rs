//! Model artifacts: JSON linear-classifier exports.
//!
//! Each condition's artifact is a logistic model exported by the external
//! training pipeline: feature names, coefficients, intercept, optional
//! standardization parameters and reported validation metrics. The crate
//! never trains or persists models; it only loads and evaluates them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Condition, ModelMetrics};
use crate::ports::{Classifier, FeatureScaler, ModelError};

/// Errors produced while loading a model artifact.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid artifact format: {0}")]
    Format(#[from] serde_json::Error),

    #[error("artifact for {condition} declares {got} features, expected {expected}")]
    ArityMismatch {
        condition: Condition,
        got: usize,
        expected: usize,
    },

    #[error("artifact parameter lengths do not match feature_names length")]
    LengthMismatch,

    #[error("scaler std entries must be positive and finite")]
    InvalidScaler,
}

/// Standardization parameters fitted by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

/// A linear classifier exported as JSON by the training pipeline.
///
/// The expected layout is `<model_dir>/<condition_id>.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedLinearModel {
    pub model_name: String,
    pub accuracy: f64,
    pub auc: f64,
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,

    /// Absent when the model was trained on unscaled features.
    #[serde(default)]
    pub scaler: Option<ScalerParams>,
}

impl ExportedLinearModel {
    /// Load and sanity-check the artifact for one condition.
    ///
    /// # Errors
    /// Returns `ArtifactError` if the file is unreadable or malformed, or
    /// if its parameter lengths do not match the condition's declared
    /// feature arity.
    pub fn load(path: &Path, condition: Condition) -> Result<Self, ArtifactError> {
        let content = std::fs::read_to_string(path).map_err(|source| ArtifactError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let model: Self = serde_json::from_str(&content)?;
        model.check(condition)?;

        tracing::info!(
            "Loaded {} model from {:?} ({}, {} features)",
            condition.id(),
            path,
            model.model_name,
            model.feature_names.len()
        );
        Ok(model)
    }

    fn check(&self, condition: Condition) -> Result<(), ArtifactError> {
        let n = self.feature_names.len();
        if n != condition.feature_arity() {
            return Err(ArtifactError::ArityMismatch {
                condition,
                got: n,
                expected: condition.feature_arity(),
            });
        }
        if self.coefficients.len() != n {
            return Err(ArtifactError::LengthMismatch);
        }
        if let Some(scaler) = &self.scaler {
            if scaler.mean.len() != n || scaler.std.len() != n {
                return Err(ArtifactError::LengthMismatch);
            }
            if scaler.std.iter().any(|s| !s.is_finite() || *s <= 0.0) {
                return Err(ArtifactError::InvalidScaler);
            }
        }
        Ok(())
    }

    /// The metrics reported by the training pipeline.
    #[must_use]
    pub fn metrics(&self) -> ModelMetrics {
        ModelMetrics {
            model_name: self.model_name.clone(),
            accuracy: self.accuracy,
            auc: self.auc,
        }
    }

    /// Split the artifact into its classifier and optional scaler.
    #[must_use]
    pub fn into_parts(self) -> (LinearClassifier, Option<StandardScaler>) {
        let classifier = LinearClassifier::new(self.coefficients, self.intercept);
        let scaler = self
            .scaler
            .map(|params| StandardScaler::new(params.mean, params.std));
        (classifier, scaler)
    }
}

/// Logistic regression over a fixed-order feature vector.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearClassifier {
    #[must_use]
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

impl Classifier for LinearClassifier {
    fn predict_probability(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::ArityMismatch {
                got: features.len(),
                expected: self.coefficients.len(),
            });
        }

        let logit: f64 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(coefficient, feature)| coefficient * feature)
            .sum::<f64>()
            + self.intercept;

        let probability = sigmoid(logit);
        if !probability.is_finite() {
            return Err(ModelError::NonFiniteOutput);
        }
        Ok(probability)
    }

    fn arity(&self) -> usize {
        self.coefficients.len()
    }
}

/// Standardization: `(x - mean) / std`, element-wise.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: Vec<f64>,
    std: Vec<f64>,
}

impl StandardScaler {
    #[must_use]
    pub fn new(mean: Vec<f64>, std: Vec<f64>) -> Self {
        Self { mean, std }
    }
}

impl FeatureScaler for StandardScaler {
    fn transform(&self, features: &[f64]) -> Vec<f64> {
        features
            .iter()
            .zip(self.mean.iter().zip(&self.std))
            .map(|(x, (mean, std))| (x - mean) / std)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_artifact(path: &Path, n: usize) {
        let model = ExportedLinearModel {
            model_name: "Logistic Regression".to_string(),
            accuracy: 0.83,
            auc: 0.88,
            feature_names: (0..n).map(|i| format!("f{i}")).collect(),
            coefficients: vec![0.0; n],
            intercept: 0.0,
            scaler: Some(ScalerParams {
                mean: vec![0.0; n],
                std: vec![1.0; n],
            }),
        };
        let json = serde_json::to_string(&model).expect("serialize model");
        std::fs::write(path, json).expect("write model");
    }

    #[test]
    fn test_load_valid_artifact() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("hypertension.json");
        write_artifact(&path, 13);

        let model = ExportedLinearModel::load(&path, Condition::Hypertension).expect("load");
        assert_eq!(model.metrics().model_name, "Logistic Regression");
        assert!(model.scaler.is_some());
    }

    #[test]
    fn test_load_rejects_arity_mismatch() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("diabetes.json");
        write_artifact(&path, 13); // diabetes expects 10

        let err = ExportedLinearModel::load(&path, Condition::Diabetes).expect_err("must fail");
        assert!(matches!(err, ArtifactError::ArityMismatch { got: 13, .. }));
    }

    #[test]
    fn test_load_rejects_zero_std_scaler() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("diabetes.json");
        let model = ExportedLinearModel {
            model_name: "bad".to_string(),
            accuracy: 0.5,
            auc: 0.5,
            feature_names: (0..10).map(|i| format!("f{i}")).collect(),
            coefficients: vec![0.0; 10],
            intercept: 0.0,
            scaler: Some(ScalerParams {
                mean: vec![0.0; 10],
                std: vec![0.0; 10],
            }),
        };
        std::fs::write(&path, serde_json::to_string(&model).unwrap()).unwrap();

        let err = ExportedLinearModel::load(&path, Condition::Diabetes).expect_err("must fail");
        assert!(matches!(err, ArtifactError::InvalidScaler));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = tempdir().expect("tempdir");
        let err = ExportedLinearModel::load(&temp.path().join("nope.json"), Condition::Diabetes)
            .expect_err("must fail");
        assert!(matches!(err, ArtifactError::Read { .. }));
    }

    #[test]
    fn test_zero_model_predicts_one_half() {
        let classifier = LinearClassifier::new(vec![0.0; 3], 0.0);
        let p = classifier.predict_probability(&[1.0, 2.0, 3.0]).unwrap();
        assert!((p - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_prediction_rejects_wrong_arity() {
        let classifier = LinearClassifier::new(vec![0.0; 3], 0.0);
        let err = classifier.predict_probability(&[1.0]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::ArityMismatch {
                got: 1,
                expected: 3
            }
        ));
    }

    #[test]
    fn test_sigmoid_saturation_stays_in_range() {
        let classifier = LinearClassifier::new(vec![100.0], 0.0);
        let high = classifier.predict_probability(&[10.0]).unwrap();
        let low = classifier.predict_probability(&[-10.0]).unwrap();
        assert!(high > 0.999 && high <= 1.0);
        assert!(low < 0.001 && low >= 0.0);
    }

    #[test]
    fn test_scaler_standardizes() {
        let scaler = StandardScaler::new(vec![10.0, 20.0], vec![2.0, 5.0]);
        let out = scaler.transform(&[14.0, 10.0]);
        assert!((out[0] - 2.0).abs() < f64::EPSILON);
        assert!((out[1] + 2.0).abs() < f64::EPSILON);
    }
}
