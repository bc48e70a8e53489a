//! Adapters layer: Concrete implementations of ports.
//!
//! - `artifact`: JSON linear-model exports produced by the training pipeline
//! - `demo`: deterministic synthetic fallback models
//! - `registry`: per-condition model registry with fallback

pub mod artifact;
pub mod demo;
pub mod registry;

pub use artifact::{ArtifactError, ExportedLinearModel, LinearClassifier, StandardScaler};
pub use registry::ModelRegistry;
