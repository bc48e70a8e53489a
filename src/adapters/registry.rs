//! Model registry: per-condition classifier, scaler and metrics.
//!
//! Artifacts are loaded once at process start and are read-only for the
//! process lifetime. A missing or unusable artifact is non-fatal: the
//! registry substitutes the synthetic demo model for that condition.

use std::path::Path;

use crate::adapters::artifact::ExportedLinearModel;
use crate::adapters::demo;
use crate::domain::{Condition, ModelMetrics};
use crate::ports::{Classifier, FeatureScaler};

/// Environment variable naming the artifact directory.
pub const MODEL_DIR_ENV: &str = "VITALSENSE_MODEL_DIR";

/// Artifact directory used when the environment variable is unset.
pub const DEFAULT_MODEL_DIR: &str = "models";

struct Entry {
    classifier: Box<dyn Classifier>,
    scaler: Option<Box<dyn FeatureScaler>>,
    metrics: ModelMetrics,
    fallback: bool,
}

/// Per-condition registry of classifiers, scalers and reported metrics.
pub struct ModelRegistry {
    entries: [Option<Entry>; 3],
}

impl ModelRegistry {
    /// A registry with no models. Every classification against it yields
    /// `ModelUnavailable`.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: [None, None, None],
        }
    }

    /// Load artifacts from `dir`, substituting the synthetic fallback for
    /// any condition whose artifact is missing or unusable.
    #[must_use]
    pub fn load_or_demo(dir: &Path) -> Self {
        let mut registry = Self::empty();
        for condition in Condition::ALL {
            let path = dir.join(format!("{}.json", condition.id()));
            if !path.exists() {
                tracing::info!(
                    "No {} artifact at {:?}, using demo model",
                    condition.id(),
                    path
                );
                registry.register_demo(condition);
                continue;
            }
            match ExportedLinearModel::load(&path, condition) {
                Ok(model) => registry.register_artifact(condition, model),
                Err(err) => {
                    tracing::warn!(
                        "Unusable {} artifact at {:?} ({err}), using demo model",
                        condition.id(),
                        path
                    );
                    registry.register_demo(condition);
                }
            }
        }
        registry
    }

    /// Load from the directory named by `VITALSENSE_MODEL_DIR`, falling
    /// back to `models`.
    #[must_use]
    pub fn from_env() -> Self {
        let dir =
            std::env::var(MODEL_DIR_ENV).unwrap_or_else(|_| DEFAULT_MODEL_DIR.to_string());
        Self::load_or_demo(Path::new(&dir))
    }

    /// Register an externally constructed model.
    pub fn register(
        &mut self,
        condition: Condition,
        classifier: Box<dyn Classifier>,
        scaler: Option<Box<dyn FeatureScaler>>,
        metrics: ModelMetrics,
    ) {
        self.entries[condition.index()] = Some(Entry {
            classifier,
            scaler,
            metrics,
            fallback: false,
        });
    }

    fn register_artifact(&mut self, condition: Condition, model: ExportedLinearModel) {
        let metrics = model.metrics();
        let (classifier, scaler) = model.into_parts();
        self.entries[condition.index()] = Some(Entry {
            classifier: Box::new(classifier),
            scaler: scaler.map(|s| Box::new(s) as Box<dyn FeatureScaler>),
            metrics,
            fallback: false,
        });
    }

    fn register_demo(&mut self, condition: Condition) {
        let (classifier, scaler) = demo::demo_model(condition);
        self.entries[condition.index()] = Some(Entry {
            classifier: Box::new(classifier),
            scaler: Some(Box::new(scaler)),
            metrics: demo::demo_metrics(condition),
            fallback: true,
        });
    }

    #[must_use]
    pub fn has_model(&self, condition: Condition) -> bool {
        self.entries[condition.index()].is_some()
    }

    #[must_use]
    pub fn classifier(&self, condition: Condition) -> Option<&dyn Classifier> {
        self.entries[condition.index()]
            .as_ref()
            .map(|entry| entry.classifier.as_ref())
    }

    #[must_use]
    pub fn scaler(&self, condition: Condition) -> Option<&dyn FeatureScaler> {
        self.entries[condition.index()]
            .as_ref()
            .and_then(|entry| entry.scaler.as_deref())
    }

    /// Reported performance metrics for the condition's model.
    #[must_use]
    pub fn metrics(&self, condition: Condition) -> Option<&ModelMetrics> {
        self.entries[condition.index()]
            .as_ref()
            .map(|entry| &entry.metrics)
    }

    /// Whether the condition is served by the synthetic demo model.
    #[must_use]
    pub fn is_fallback(&self, condition: Condition) -> bool {
        self.entries[condition.index()]
            .as_ref()
            .is_some_and(|entry| entry.fallback)
    }
}
