//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement the
//! assessment pipeline: feature mapping, risk classification,
//! recommendation selection and the chat responder.

mod chat;
mod features;
mod knowledge;
mod recommend;
mod risk;
mod session;

pub use chat::ChatResponder;
pub use features::map_features;
pub use knowledge::{ConditionKnowledge, KnowledgeBase};
pub use recommend::Recommendations;
pub use risk::RiskEngine;
pub use session::Session;
