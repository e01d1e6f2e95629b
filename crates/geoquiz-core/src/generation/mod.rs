//! Client for the external text-generation service.

mod client;
mod types;

pub use client::QuizGenerator;
pub use types::{ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChoiceMessage};
