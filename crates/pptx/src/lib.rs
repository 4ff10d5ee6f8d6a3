//! PPTX (Office Open XML) writer backend for generated slide decks.
//!
//! Writes .pptx files, which are ZIP archives of XML parts, from a parsed
//! outline: one title slide followed by title-and-content slides.

pub mod slide;
pub mod style;
pub mod template;
pub mod writer;

pub use style::SlideStyle;
pub use writer::{output_path, PptxWriter};

/// File name used when the caller gives none.
pub const DEFAULT_BASE_NAME: &str = "presentation";
