//! Web search tool available to the research agent.

use crate::model::{ChatMessage, ChatModel, ChatRequest};
use deck_core::prompts::SEARCH_SYSTEM_PROMPT;
use deck_core::Result;

const SEARCH_TEMPERATURE: f32 = 0.2;
const SEARCH_MAX_TOKENS: u32 = 2000;

/// Answers a query with up-to-date information from a search-backed model.
pub struct WebSearchTool<'a, M: ChatModel> {
    model: &'a M,
    model_name: String,
}

impl<'a, M: ChatModel> WebSearchTool<'a, M> {
    pub fn new(model: &'a M, model_name: impl Into<String>) -> Self {
        Self {
            model,
            model_name: model_name.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        "web_search_tool"
    }

    /// Run one search query.
    pub fn run(&self, query: &str) -> Result<String> {
        log::info!("Running web search ({} chars of query)", query.len());

        let request = ChatRequest {
            model: self.model_name.clone(),
            messages: vec![
                ChatMessage::system(SEARCH_SYSTEM_PROMPT),
                ChatMessage::user(query),
            ],
            temperature: SEARCH_TEMPERATURE,
            max_tokens: Some(SEARCH_MAX_TOKENS),
        };

        self.model.complete(&request)
    }
}
