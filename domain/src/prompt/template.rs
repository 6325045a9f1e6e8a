//! Prompt templates for interview generation

/// Source of the domain wording for each prompt.
///
/// Implementations must be pure: same input, same text.
pub trait InterviewPrompts: Send + Sync {
    /// Prompt asking for `count` question/answer pairs
    fn question_answer(&self, role: &str, experience: &str, topics: &str, count: u32) -> String;

    /// Prompt asking for an explanation of one interview question
    fn concept_explanation(&self, question: &str) -> String;
}

/// Built-in templates
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptTemplate;

impl PromptTemplate {
    /// User prompt for question/answer generation
    pub fn question_answer(role: &str, experience: &str, topics: &str, count: u32) -> String {
        format!(
            r#"You are an AI trained to generate technical interview questions and answers.

Task:
- Role: {role}
- Candidate Experience: {experience}
- Focus Topics: {topics}
- Write {count} interview questions.
- For each question, generate a detailed but beginner-friendly answer.
- If the answer needs a code example, describe it in plain words instead."#
        )
    }

    /// User prompt for concept explanation
    pub fn concept_explanation(question: &str) -> String {
        format!(
            r#"You are an AI trained to generate explanations for interview questions.

Task:
- Explain the following interview question and the concept behind it in depth, as if you are teaching a beginner developer.
- Question: "{question}"
- After the explanation, summarize the key idea in one or two sentences."#
        )
    }
}

impl InterviewPrompts for PromptTemplate {
    fn question_answer(&self, role: &str, experience: &str, topics: &str, count: u32) -> String {
        Self::question_answer(role, experience, topics, count)
    }

    fn concept_explanation(&self, question: &str) -> String {
        Self::concept_explanation(question)
    }
}
