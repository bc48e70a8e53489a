//! Chat responder: keyword-routed canned answers over the latest
//! assessments.
//!
//! A single case-insensitive pass over the question against an ordered
//! rule list; the first matching rule wins. The precedence order is part
//! of the contract: risk > prevention > symptoms > lifestyle > default.
//! Every data-bearing reply carries an educational-only disclaimer.

use crate::application::knowledge::KnowledgeBase;
use crate::application::recommend::Recommendations;
use crate::domain::{AssessmentSet, Condition, PatientProfile, RiskLevel};

const RISK_KEYWORDS: [&str; 3] = ["risk", "probability", "chance"];
const PREVENTION_KEYWORDS: [&str; 4] = ["prevent", "reduce", "lower", "improve"];
const SYMPTOM_KEYWORDS: [&str; 3] = ["symptom", "sign", "warning"];
const LIFESTYLE_KEYWORDS: [&str; 4] = ["diet", "food", "exercise", "lifestyle"];

/// Reply when a data-dependent rule fires before any analysis has run.
const NO_DATA_REPLY: &str = "I don't have any risk assessments yet. Complete a health \
     assessment first, then ask me about your results.";

const CAPABILITIES_REPLY: &str = "🤖 **I'm your AI Health Assistant!** I can help you understand:\n\n\
     • 📊 Your health risk assessments and what they mean\n\
     • 💡 Lifestyle changes to improve your health\n\
     • ⚠️ Warning signs and symptoms to watch for\n\
     • 🥗 Diet and exercise recommendations\n\
     • 🏥 When to seek medical care\n\n\
     **Important**: I provide educational information only. I cannot prescribe \
     medications or replace professional medical advice. Always consult healthcare \
     providers for medical decisions.\n\n\
     Try asking: \"What can I do to reduce my risk?\" or \"What symptoms should I watch for?\"";

/// Answers free-text questions with canned, keyword-routed responses.
pub struct ChatResponder {
    knowledge: KnowledgeBase,
    recommendations: Recommendations,
}

impl ChatResponder {
    /// Build a responder over the embedded knowledge and advice assets.
    ///
    /// # Errors
    /// Returns a serialization error if an embedded asset is malformed.
    pub fn new() -> crate::Result<Self> {
        Ok(Self {
            knowledge: KnowledgeBase::embedded()?,
            recommendations: Recommendations::embedded()?,
        })
    }

    /// Build a responder over caller-supplied tables.
    #[must_use]
    pub fn with_tables(knowledge: KnowledgeBase, recommendations: Recommendations) -> Self {
        Self {
            knowledge,
            recommendations,
        }
    }

    /// Answer a free-text question using the latest assessments.
    ///
    /// The profile is accepted for parity with the assessment pipeline;
    /// routing currently depends only on the question and the assessments.
    #[must_use]
    pub fn respond(
        &self,
        question: &str,
        _profile: &PatientProfile,
        assessments: &AssessmentSet,
    ) -> String {
        let question = question.to_lowercase();

        if contains_any(&question, &RISK_KEYWORDS) {
            self.risk_summary(assessments)
        } else if contains_any(&question, &PREVENTION_KEYWORDS) {
            self.prevention_tips(assessments)
        } else if contains_any(&question, &SYMPTOM_KEYWORDS) {
            self.warning_signs(assessments)
        } else if contains_any(&question, &LIFESTYLE_KEYWORDS) {
            self.lifestyle_advice(assessments)
        } else {
            CAPABILITIES_REPLY.to_string()
        }
    }

    /// Rule 1: probabilities and tiers for every available assessment,
    /// then the highest concern.
    fn risk_summary(&self, assessments: &AssessmentSet) -> String {
        if assessments.is_empty() {
            return NO_DATA_REPLY.to_string();
        }

        let mut response = String::from("Based on your health assessment:\n\n");
        for (condition, assessment) in assessments.iter() {
            response.push_str(&format!(
                "🎯 **{}**: {:.1}% ({} risk)\n",
                condition.display_name(),
                assessment.probability * 100.0,
                assessment.risk_level
            ));
        }

        if let Some((condition, assessment)) = assessments.max_probability() {
            response.push_str(&format!(
                "\n⚠️ Your highest concern is **{}** at {:.1}% risk.",
                condition.id().replace('_', " "),
                assessment.probability * 100.0
            ));
        }
        response
    }

    /// Rule 2: first five prevention tips for the highest-probability
    /// condition.
    fn prevention_tips(&self, assessments: &AssessmentSet) -> String {
        let Some((condition, _)) = assessments.max_probability() else {
            return NO_DATA_REPLY.to_string();
        };

        let tips = self
            .knowledge
            .get(condition)
            .map(|entry| entry.prevention.as_slice())
            .unwrap_or(&[]);

        let mut response = format!(
            "To reduce your **{}** risk:\n\n",
            condition.id().replace('_', " ")
        );
        for (i, tip) in tips.iter().take(5).enumerate() {
            response.push_str(&format!("{}. {tip}\n", i + 1));
        }
        response.push_str(
            "\n⚠️ **Important**: These are general guidelines. Consult your doctor for \
             personalized medical advice.",
        );
        response
    }

    /// Rule 3: symptom lists for every condition at Moderate or High.
    fn warning_signs(&self, assessments: &AssessmentSet) -> String {
        let mut response = String::from("🚨 **Warning Signs to Watch For:**\n\n");

        for condition in Condition::ALL {
            let Some(assessment) = assessments.get(condition) else {
                continue;
            };
            if !matches!(assessment.risk_level, RiskLevel::Moderate | RiskLevel::High) {
                continue;
            }
            let Some(entry) = self.knowledge.get(condition) else {
                continue;
            };

            response.push_str(&format!("**{}** symptoms:\n", condition.display_name()));
            for symptom in &entry.symptoms {
                response.push_str(&format!("• {symptom}\n"));
            }
            response.push('\n');
        }

        response.push_str(
            "🚨 **EMERGENCY**: Call 911 if you experience chest pain, difficulty breathing, \
             or severe symptoms!",
        );
        response
    }

    /// Rule 4: up to six recommendations for the highest-probability
    /// condition, when it sits at Moderate or High.
    fn lifestyle_advice(&self, assessments: &AssessmentSet) -> String {
        if assessments.is_empty() {
            return NO_DATA_REPLY.to_string();
        }

        let mut response = String::from("🏃‍♂️ **Lifestyle Recommendations Based on Your Risk:**\n\n");
        if let Some((condition, assessment)) = assessments.max_probability() {
            if matches!(assessment.risk_level, RiskLevel::Moderate | RiskLevel::High) {
                for advice in self
                    .recommendations
                    .for_risk(condition, assessment.risk_level)
                    .iter()
                    .take(6)
                {
                    response.push_str(&format!("• {advice}\n"));
                }
            }
        }

        response.push_str(
            "\n💡 **Remember**: Start gradually and consult healthcare providers before \
             major changes.",
        );
        response
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
