//! Adapter for OpenAI-compatible chat-completion APIs (Groq, OpenAI, ...).

mod client;
mod dto;

pub use client::OpenAiCompatGateway;
pub use dto::{ChatRequest, ChatResponse, ResponseFormat};
