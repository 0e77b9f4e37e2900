//! The user's in-progress or completed questionnaire responses.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::Dosha;

/// The chosen option for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// The chosen option's value.
    pub value: String,
    /// The dosha the choice counts toward.
    pub dosha: Dosha,
    /// The choice's scoring weight.
    #[serde(default = "default_weight")]
    pub weight: u32,
}

fn default_weight() -> u32 {
    1
}

impl Answer {
    /// Creates an answer.
    pub fn new(value: impl Into<String>, dosha: Dosha, weight: u32) -> Self {
        Self {
            value: value.into(),
            dosha,
            weight,
        }
    }
}

/// Mapping from question id to the chosen answer.
///
/// Grows monotonically as the user progresses; re-answering a question
/// overwrites the prior choice. Never contains an entry for an
/// unanswered question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, Answer>);

impl AnswerSet {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the answer for a question, overwriting any prior choice.
    pub fn record(&mut self, question_id: impl Into<String>, answer: Answer) {
        self.0.insert(question_id.into(), answer);
    }

    /// Returns the answer for a question, if answered.
    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.0.get(question_id)
    }

    /// True if the question has been answered.
    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    /// Iterates over (question id, answer) pairs in question-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Answer)> {
        self.0.iter()
    }

    /// Iterates over the answers.
    pub fn answers(&self) -> impl Iterator<Item = &Answer> {
        self.0.values()
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no question has been answered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
