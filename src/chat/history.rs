//! Client-side session history

use serde::{Deserialize, Serialize};

use crate::openai::CONTEXT_TURNS;

/// One user message paired with its bot reply. Immutable once
/// recorded.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Turn {
    pub question: String,
    pub answer: String,
}

/// Ordered session history. Turns are stored newest-first for
/// display; `context_window` re-orders the retained slice to
/// chronological for transmission to the proxy.
#[derive(Default)]
pub struct SessionHistory {
    turns: Vec<Turn>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed exchange at the front (newest-first)
    pub fn record(&mut self, question: &str, answer: &str) {
        self.turns.insert(
            0,
            Turn {
                question: question.to_string(),
                answer: answer.to_string(),
            },
        );
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Turns newest-first, as displayed
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Turns oldest-first
    pub fn chronological(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter().rev()
    }

    /// The history slice sent as context with the next request: the
    /// most recent turns, re-ordered oldest-first. The storage order
    /// is the reverse of the wire order, so the slice must be
    /// reversed here and nowhere else.
    pub fn context_window(&self) -> Vec<(String, String)> {
        self.turns
            .iter()
            .take(CONTEXT_TURNS)
            .rev()
            .map(|turn| (turn.question.clone(), turn.answer.clone()))
            .collect()
    }
}
