//! Input normalization
//!
//! Clients disagree on field names: the same logical value may arrive as
//! `role` or `targetRole`, `topicsToFocus` or `topics`, and so on. Each
//! logical field has one [`FieldRule`] listing its accepted keys in priority
//! order (canonical key first) and the default applied when none of them
//! carries a usable value. The rules live in [`RESOLUTION_TABLE`].
//!
//! Value coercion follows these rules:
//!
//! | JSON value            | Treated as                          |
//! |-----------------------|-------------------------------------|
//! | non-blank string      | trimmed string                      |
//! | non-zero number       | its decimal rendering               |
//! | array of strings      | non-blank items joined with `", "`  |
//! | anything else         | absent                              |

use super::request::{DEFAULT_QUESTION_COUNT, ExplanationRequest, GenerationRequest};
use crate::core::error::DomainError;
use crate::core::string::non_blank;
use serde_json::{Map, Value};

/// A raw, untrusted request body.
pub type RequestBody = Map<String, Value>;

/// Ordered key list and default for one logical input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Logical field name, used in error messages
    pub field: &'static str,
    /// Accepted body keys, highest priority first
    pub keys: &'static [&'static str],
    /// Value used when no key resolves
    pub default: Option<&'static str>,
}

impl FieldRule {
    /// First usable value among `keys`, in priority order.
    pub fn lookup(&self, body: &RequestBody) -> Option<String> {
        self.keys
            .iter()
            .filter_map(|key| body.get(*key))
            .find_map(text_value)
    }

    /// [`lookup`](Self::lookup), falling back to the rule's default.
    pub fn resolve(&self, body: &RequestBody) -> Option<String> {
        self.lookup(body)
            .or_else(|| self.default.map(str::to_string))
    }
}

pub const ROLE: FieldRule = FieldRule {
    field: "role",
    keys: &["role", "targetRole"],
    default: Some("Interview Candidate"),
};

pub const EXPERIENCE: FieldRule = FieldRule {
    field: "experience",
    keys: &["experience", "yearsOfExperience"],
    default: Some("Fresher"),
};

pub const TOPICS: FieldRule = FieldRule {
    field: "topics",
    keys: &["topicsToFocus", "topicsToFocusOn", "topics"],
    default: Some("General"),
};

/// The count default is numeric; see [`DEFAULT_QUESTION_COUNT`].
pub const COUNT: FieldRule = FieldRule {
    field: "count",
    keys: &["numberOfQuestions", "count"],
    default: None,
};

pub const NOTES: FieldRule = FieldRule {
    field: "notes",
    keys: &["description"],
    default: None,
};

pub const QUESTION: FieldRule = FieldRule {
    field: "question",
    keys: &["question"],
    default: None,
};

/// Every rule used for question generation.
pub const RESOLUTION_TABLE: &[FieldRule] = &[ROLE, EXPERIENCE, TOPICS, COUNT, NOTES];

/// Build a [`GenerationRequest`] from a raw body.
///
/// # Errors
/// [`DomainError::MissingFields`] if role, experience or topics is still
/// empty after defaults are applied.
pub fn normalize_generation(body: &RequestBody) -> Result<GenerationRequest, DomainError> {
    let role = ROLE.resolve(body);
    let experience = EXPERIENCE.resolve(body);
    let topics = TOPICS.resolve(body);

    let (Some(role), Some(experience), Some(topics)) = (role, experience, topics) else {
        let missing = [ROLE, EXPERIENCE, TOPICS]
            .iter()
            .filter(|rule| rule.resolve(body).is_none())
            .map(|rule| rule.field)
            .collect();
        return Err(DomainError::MissingFields(missing));
    };

    let count = COUNT
        .lookup(body)
        .and_then(|raw| coerce_count(&raw))
        .unwrap_or(DEFAULT_QUESTION_COUNT);

    Ok(GenerationRequest {
        role,
        experience,
        topics,
        count,
        notes: NOTES.lookup(body),
    })
}

/// Build an [`ExplanationRequest`] from a raw body.
///
/// # Errors
/// [`DomainError::MissingFields`] when `question` is absent or blank.
pub fn normalize_explanation(body: &RequestBody) -> Result<ExplanationRequest, DomainError> {
    QUESTION
        .resolve(body)
        .and_then(ExplanationRequest::try_new)
        .ok_or_else(|| DomainError::MissingFields(vec![QUESTION.field]))
}

fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_blank(s).map(str::to_string),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Array(items) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(|item| item.as_str().and_then(non_blank))
                .collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    }
}

/// Positive whole number from text; fractions are truncated.
fn coerce_count(raw: &str) -> Option<u32> {
    let n: f64 = raw.trim().parse().ok()?;
    if !n.is_finite() || n < 1.0 {
        return None;
    }
    // `as` saturates at u32::MAX
    Some(n.trunc() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> RequestBody {
        match value {
            Value::Object(map) => map,
            other => panic!("test body must be an object, got {other}"),
        }
    }

    // ==================== Defaults ====================

    #[test]
    fn test_empty_body_gets_defaults() {
        let request = normalize_generation(&RequestBody::new()).unwrap();
        assert_eq!(request.role, "Interview Candidate");
        assert_eq!(request.experience, "Fresher");
        assert_eq!(request.topics, "General");
        assert_eq!(request.count, 10);
        assert_eq!(request.notes, None);
    }

    #[test]
    fn test_blank_values_fall_through_to_default() {
        let request = normalize_generation(&body(json!({
            "role": "   ",
            "experience": "",
            "topics": [],
            "numberOfQuestions": null,
        })))
        .unwrap();
        assert_eq!(request.role, "Interview Candidate");
        assert_eq!(request.experience, "Fresher");
        assert_eq!(request.topics, "General");
        assert_eq!(request.count, 10);
    }

    // ==================== Priority ====================

    #[test]
    fn test_canonical_key_wins_over_alternate() {
        let request = normalize_generation(&body(json!({
            "role": "Backend Engineer",
            "targetRole": "Frontend Engineer",
            "experience": "3 years",
            "yearsOfExperience": "10 years",
            "topicsToFocus": "Node.js",
            "topicsToFocusOn": "React",
            "topics": "CSS",
            "numberOfQuestions": 5,
            "count": 20,
        })))
        .unwrap();
        assert_eq!(request.role, "Backend Engineer");
        assert_eq!(request.experience, "3 years");
        assert_eq!(request.topics, "Node.js");
        assert_eq!(request.count, 5);
    }

    #[test]
    fn test_alternate_keys_used_when_canonical_absent() {
        let request = normalize_generation(&body(json!({
            "targetRole": "Data Engineer",
            "yearsOfExperience": 4,
            "topics": "Spark",
            "count": "6",
            "description": "Focus on streaming",
        })))
        .unwrap();
        assert_eq!(request.role, "Data Engineer");
        assert_eq!(request.experience, "4");
        assert_eq!(request.topics, "Spark");
        assert_eq!(request.count, 6);
        assert_eq!(request.notes.as_deref(), Some("Focus on streaming"));
    }

    #[test]
    fn test_middle_topics_key_beats_last() {
        let request = normalize_generation(&body(json!({
            "topicsToFocusOn": "Go",
            "topics": "Rust",
        })))
        .unwrap();
        assert_eq!(request.topics, "Go");
    }

    #[test]
    fn test_topic_array_is_joined() {
        let request = normalize_generation(&body(json!({
            "topics": ["Rust", " ", "Tokio", 3],
        })))
        .unwrap();
        assert_eq!(request.topics, "Rust, Tokio");
    }

    #[test]
    fn test_zero_experience_is_treated_as_absent() {
        let request = normalize_generation(&body(json!({ "experience": 0 }))).unwrap();
        assert_eq!(request.experience, "Fresher");
    }

    // ==================== Count coercion ====================

    #[test]
    fn test_numeric_string_count() {
        let request = normalize_generation(&body(json!({ "numberOfQuestions": "7" }))).unwrap();
        assert_eq!(request.count, 7);
    }

    #[test]
    fn test_non_numeric_count_falls_back() {
        let request = normalize_generation(&body(json!({ "numberOfQuestions": "abc" }))).unwrap();
        assert_eq!(request.count, 10);
    }

    #[test]
    fn test_count_edge_values() {
        assert_eq!(coerce_count("0"), None);
        assert_eq!(coerce_count("-3"), None);
        assert_eq!(coerce_count("7.9"), Some(7));
        assert_eq!(coerce_count(" 12 "), Some(12));
        assert_eq!(coerce_count("NaN"), None);
        assert_eq!(coerce_count("inf"), None);
    }

    // ==================== Idempotence ====================

    #[test]
    fn test_normalizing_canonical_body_is_identity() {
        let original = GenerationRequest::new("Backend Engineer", "3 years", "Node.js", 5)
            .with_notes("Prefer system design");
        let once = normalize_generation(&original.to_body()).unwrap();
        assert_eq!(once, original);
        let twice = normalize_generation(&once.to_body()).unwrap();
        assert_eq!(twice, once);
    }

    // ==================== Table ====================

    #[test]
    fn test_resolution_table_lists_canonical_keys_first() {
        let canonical: Vec<&str> = RESOLUTION_TABLE.iter().map(|rule| rule.keys[0]).collect();
        assert_eq!(
            canonical,
            vec!["role", "experience", "topicsToFocus", "numberOfQuestions", "description"]
        );
    }

    // ==================== Explanation ====================

    #[test]
    fn test_explanation_requires_question() {
        let err = normalize_explanation(&RequestBody::new()).unwrap_err();
        assert_eq!(err, DomainError::MissingFields(vec!["question"]));

        let err = normalize_explanation(&body(json!({ "question": "  " }))).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_explanation_accepts_question() {
        let request =
            normalize_explanation(&body(json!({ "question": "What is the event loop?" })))
                .unwrap();
        assert_eq!(request.question(), "What is the event loop?");
    }
}
