//! Canonical request value objects

use super::normalizer::RequestBody;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Question count used when the client sends none, or sends garbage.
pub const DEFAULT_QUESTION_COUNT: u32 = 10;

/// A fully resolved request for interview question/answer pairs (Value Object)
///
/// Built by [`normalize_generation`](super::normalize_generation); every text
/// field is non-empty and `count` is at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub role: String,
    pub experience: String,
    pub topics: String,
    pub count: u32,
    pub notes: Option<String>,
}

impl GenerationRequest {
    pub fn new(
        role: impl Into<String>,
        experience: impl Into<String>,
        topics: impl Into<String>,
        count: u32,
    ) -> Self {
        Self {
            role: role.into(),
            experience: experience.into(),
            topics: topics.into(),
            count,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Render this request back into a body using only canonical keys.
    pub fn to_body(&self) -> RequestBody {
        let mut body = RequestBody::new();
        body.insert("role".to_string(), Value::from(self.role.as_str()));
        body.insert(
            "experience".to_string(),
            Value::from(self.experience.as_str()),
        );
        body.insert("topicsToFocus".to_string(), Value::from(self.topics.as_str()));
        body.insert("numberOfQuestions".to_string(), Value::from(self.count));
        if let Some(notes) = &self.notes {
            body.insert("description".to_string(), Value::from(notes.as_str()));
        }
        body
    }
}

/// A request to explain the concept behind one interview question (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationRequest {
    question: String,
}

impl ExplanationRequest {
    /// Try to create a request, returning None if the question is blank
    pub fn try_new(question: impl Into<String>) -> Option<Self> {
        let question = question.into();
        if question.trim().is_empty() {
            None
        } else {
            Some(Self { question })
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }
}
