//! Chat transcript types.
//!
//! One question/answer exchange plus the append-only session transcript.

use serde::{Deserialize, Serialize};

/// How many turns the presentation layer shows at once.
pub const DISPLAYED_TURNS: usize = 10;

/// One question/answer exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub question: String,
    pub response: String,

    /// Timestamp of the exchange
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ChatTurn {
    #[must_use]
    pub fn new(question: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            response: response.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Append-only ordered chat transcript.
///
/// All turns are retained for the session; [`ChatHistory::recent`] gives
/// the display window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatHistory {
    turns: Vec<ChatTurn>,
}

impl ChatHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recent `n` turns, oldest first.
    #[must_use]
    pub fn recent(&self, n: usize) -> &[ChatTurn] {
        &self.turns[self.turns.len().saturating_sub(n)..]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChatTurn> {
        self.turns.iter()
    }
}
