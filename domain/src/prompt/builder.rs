//! Composition of template text, client notes and the strict-output directive

use super::directive::strict_output_directive;
use super::template::InterviewPrompts;
use crate::generation::{ExplanationRequest, GenerationRequest};
use crate::output::OutputKind;

/// Placeholder echoed when the client sent no notes.
const NO_NOTES: &str = "N/A";

/// Full user prompt for a question/answer request.
pub fn question_answer_prompt(prompts: &dyn InterviewPrompts, request: &GenerationRequest) -> String {
    let base = prompts.question_answer(
        &request.role,
        &request.experience,
        &request.topics,
        request.count,
    );
    let notes = request.notes.as_deref().unwrap_or(NO_NOTES);

    format!(
        "{}\n\nExtra Notes (optional): {}\n\n{}",
        base,
        notes,
        strict_output_directive(OutputKind::Questions)
    )
}

/// Full user prompt for an explanation request.
pub fn explanation_prompt(prompts: &dyn InterviewPrompts, request: &ExplanationRequest) -> String {
    format!(
        "{}\n\n{}",
        prompts.concept_explanation(request.question()),
        strict_output_directive(OutputKind::Explanation)
    )
}
