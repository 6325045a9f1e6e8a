//! Strict-output directive
//!
//! Fixed instruction block that pins the model to a JSON-only reply with an
//! exact schema. Kept apart from the templates so that template wording can
//! change without touching the output contract.

use crate::output::OutputKind;

/// System message sent ahead of every prompt
pub const SYSTEM_PROMPT: &str = "You must return ONLY valid JSON.";

const QUESTIONS_RULES: &[&str] = &[
    "Return ONLY valid JSON (no markdown, no extra text)",
    "Do NOT include code blocks or code examples",
    "Keep answers in simple text",
];

const EXPLANATION_RULES: &[&str] = &[
    "Return ONLY valid JSON (no markdown, no extra text)",
    "Do NOT include code blocks",
];

const QUESTIONS_SCHEMA: &str = r#"{
  "questions": [
    { "question": "....", "answer": "...." }
  ]
}"#;

const EXPLANATION_SCHEMA: &str = r#"{
  "explanation": "...."
}"#;

/// Render the directive block for the requested reply shape.
pub fn strict_output_directive(kind: OutputKind) -> String {
    let (rules, schema) = match kind {
        OutputKind::Questions => (QUESTIONS_RULES, QUESTIONS_SCHEMA),
        OutputKind::Explanation => (EXPLANATION_RULES, EXPLANATION_SCHEMA),
    };

    let mut block = String::from("STRICT RULES:\n");
    for rule in rules {
        block.push_str("- ");
        block.push_str(rule);
        block.push('\n');
    }
    block.push_str("\nReturn JSON in this exact format:\n");
    block.push_str(schema);
    block.push('\n');
    block
}
