//! Use cases (application services)
//!
//! - [`generate_questions`]: question/answer pairs for a role and topic set
//! - [`explain_concept`]: explanation of a single interview question
//!
//! Both run the same pipeline from [`shared`]: build the prompt, call the
//! provider once, parse and check the reply.

pub mod explain_concept;
pub mod generate_questions;
pub mod shared;

#[cfg(test)]
pub(crate) mod testing;
