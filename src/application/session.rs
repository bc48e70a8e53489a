//! Session context: the mutable state of one user session.
//!
//! The latest profile, the latest assessment set and the chat transcript
//! live in this explicit object rather than in ambient globals, so the
//! pipeline stays pure and independently testable. One user action
//! mutates the session at a time; there are no concurrent writers.

use crate::application::chat::ChatResponder;
use crate::application::risk::RiskEngine;
use crate::domain::{AssessmentSet, ChatHistory, ChatTurn, PatientProfile};

/// One user session: latest analysis results plus the chat transcript.
#[derive(Default)]
pub struct Session {
    profile: Option<PatientProfile>,
    assessments: AssessmentSet,
    history: ChatHistory,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a full analysis, replacing the previous assessments.
    pub fn analyze(&mut self, engine: &RiskEngine, profile: PatientProfile) -> &AssessmentSet {
        self.assessments = engine.assess_all(&profile);
        tracing::info!("Analysis produced {} assessments", self.assessments.len());
        self.profile = Some(profile);
        &self.assessments
    }

    /// Ask the responder a question and record the exchange.
    ///
    /// Works before any analysis has run: the responder then answers from
    /// an empty assessment set (the profile never influences routing).
    pub fn ask(&mut self, responder: &ChatResponder, question: &str) -> String {
        let fallback = PatientProfile::default();
        let profile = self.profile.as_ref().unwrap_or(&fallback);

        let response = responder.respond(question, profile, &self.assessments);
        self.history.push(ChatTurn::new(question, response.clone()));
        response
    }

    #[must_use]
    pub fn profile(&self) -> Option<&PatientProfile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub fn assessments(&self) -> &AssessmentSet {
        &self.assessments
    }

    #[must_use]
    pub fn history(&self) -> &ChatHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ModelRegistry;
    use tempfile::tempdir;

    fn engine() -> RiskEngine {
        let temp = tempdir().expect("tempdir");
        RiskEngine::new(ModelRegistry::load_or_demo(temp.path()))
    }

    fn profile() -> PatientProfile {
        PatientProfile {
            name: "Jo".to_string(),
            ..PatientProfile::default()
        }
    }

    #[test]
    fn test_analyze_then_ask() {
        let engine = engine();
        let responder = ChatResponder::new().unwrap();
        let mut session = Session::new();

        assert!(session.assessments().is_empty());
        session.analyze(&engine, profile());
        assert_eq!(session.assessments().len(), 3);

        let reply = session.ask(&responder, "what is my risk?");
        assert!(reply.contains("Based on your health assessment"));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().recent(10)[0].question, "what is my risk?");
    }

    #[test]
    fn test_ask_before_analysis_is_defined() {
        let responder = ChatResponder::new().unwrap();
        let mut session = Session::new();

        let reply = session.ask(&responder, "what's my risk?");
        assert!(reply.contains("don't have any risk assessments"));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_new_analysis_replaces_assessments() {
        let engine = engine();
        let mut session = Session::new();

        session.analyze(&engine, profile());
        let first: Vec<f64> = session
            .assessments()
            .iter()
            .map(|(_, a)| a.probability)
            .collect();

        // Same engine, same profile: deterministic pipeline.
        session.analyze(&engine, profile());
        let second: Vec<f64> = session
            .assessments()
            .iter()
            .map(|(_, a)| a.probability)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_history_accumulates_across_turns() {
        let responder = ChatResponder::new().unwrap();
        let mut session = Session::new();
        for i in 0..12 {
            session.ask(&responder, &format!("question {i}"));
        }
        assert_eq!(session.history().len(), 12);
        assert_eq!(session.history().recent(10).len(), 10);
    }
}
