//! Classifier port: Traits for the pre-trained model seam.
//!
//! These traits abstract the classifier artifacts from the application
//! logic: the risk engine only ever sees "probability of the positive
//! class given a feature vector" and "standardize a raw vector".

/// Errors produced when evaluating a registered model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("feature count mismatch: got {got}, expected {expected}")]
    ArityMismatch { got: usize, expected: usize },

    #[error("classifier produced a non-finite probability")]
    NonFiniteOutput,
}

/// A fitted binary classifier for one condition.
///
/// Implementations are loaded or constructed once at process start and are
/// read-only thereafter.
pub trait Classifier: Send + Sync {
    /// Probability of the positive class for one feature vector.
    ///
    /// # Errors
    /// Returns `ModelError::ArityMismatch` if the vector length does not
    /// match the model's arity, `ModelError::NonFiniteOutput` if the model
    /// evaluates to NaN or infinity.
    fn predict_probability(&self, features: &[f64]) -> Result<f64, ModelError>;

    /// Number of features the model consumes.
    fn arity(&self) -> usize;
}

/// A fitted feature scaler (standardization).
pub trait FeatureScaler: Send + Sync {
    /// Transform a raw vector into its standardized form.
    fn transform(&self, features: &[f64]) -> Vec<f64>;
}
