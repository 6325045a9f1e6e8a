use serde::{Deserialize, Serialize};

/// The two structured replies the service asks a model for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    /// `{ "questions": [ { "question": ..., "answer": ... } ] }`
    Questions,
    /// `{ "explanation": ... }`
    Explanation,
}

impl OutputKind {
    /// Top-level key the reply must carry
    pub fn root_key(&self) -> &'static str {
        match self {
            OutputKind::Questions => "questions",
            OutputKind::Explanation => "explanation",
        }
    }
}

impl std::fmt::Display for OutputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.root_key())
    }
}
