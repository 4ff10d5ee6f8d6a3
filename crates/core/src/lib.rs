//! Core domain types, outline parsing, prompt templates and configuration
//! for slide deck generation.

pub mod config;
pub mod error;
pub mod outline;
pub mod prompts;
pub mod types;

pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use outline::{parse_outline, OutlineAdapter, SlideHeaderParser};
pub use prompts::{AgentProfile, Stage, TaskSpec};
pub use types::{DeckSlide, Outline, SlideRecord};
