//! Sequential agent pipeline for researching a topic and drafting slide text.
//!
//! Talks to an OpenAI-style chat-completions API through the [`ChatModel`]
//! trait; [`PerplexityClient`] is the HTTP implementation.

pub mod client;
pub mod model;
pub mod pipeline;
pub mod search;

#[cfg(test)]
mod testing;

pub use client::PerplexityClient;
pub use model::{ChatMessage, ChatModel, ChatRequest};
pub use pipeline::{Pipeline, PipelineOutput, StageOutput};
pub use search::WebSearchTool;
