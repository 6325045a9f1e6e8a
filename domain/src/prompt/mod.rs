//! Prompt domain
//!
//! Interview prompt templates, the strict-output directive appended to every
//! prompt, and the functions that compose the two into the user message.

mod builder;
mod directive;
mod template;

pub use builder::{explanation_prompt, question_answer_prompt};
pub use directive::{SYSTEM_PROMPT, strict_output_directive};
pub use template::{InterviewPrompts, PromptTemplate};
