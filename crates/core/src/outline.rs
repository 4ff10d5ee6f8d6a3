//! Outline parsing for generated slide text.
//!
//! The generator stage answers in loosely structured text: slide headers of
//! the form `Slide 3: Title`, each followed by `-` bullet lines. Everything
//! else in the answer is ignored.

use crate::types::{Outline, SlideRecord};
use regex::Regex;
use std::sync::LazyLock;

/// Regex matching a slide header line and capturing the title after the colon.
static SLIDE_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^slide\s*\d+\s*:(.*)$").unwrap());

/// Markdown bold markers, removed before any line is inspected.
const BOLD_MARKER: &str = "**";

/// Converts free text into an [`Outline`].
///
/// Kept as a trait so the text format can change without touching rendering.
pub trait OutlineAdapter {
    fn parse(&self, text: &str) -> Outline;
}

/// Line-based parser for `Slide N: Title` headers and `-` bullets.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlideHeaderParser;

impl SlideHeaderParser {
    pub fn new() -> Self {
        Self
    }
}

impl OutlineAdapter for SlideHeaderParser {
    /// Parse generated text into slide records.
    ///
    /// A header flushes the previous slide whenever that slide has a title,
    /// even with no points. At end of input the last slide is kept only if
    /// it has both a title and at least one point.
    fn parse(&self, text: &str) -> Outline {
        let text = text.replace(BOLD_MARKER, "");

        let mut slides = Vec::new();
        let mut title = String::new();
        let mut points: Vec<String> = Vec::new();

        for line in text.trim().lines() {
            let line = line.trim();

            if let Some(caps) = SLIDE_HEADER_REGEX.captures(line) {
                if !title.is_empty() {
                    slides.push(SlideRecord::new(
                        std::mem::take(&mut title),
                        std::mem::take(&mut points),
                    ));
                }
                title = caps[1].trim().to_string();
                points.clear();
            } else if line.starts_with('-') {
                let point = line.trim_start_matches('-').trim();
                if !point.is_empty() {
                    points.push(point.to_string());
                }
            }
        }

        if !title.is_empty() && !points.is_empty() {
            slides.push(SlideRecord::new(title, points));
        } else if !title.is_empty() {
            log::debug!("Dropping trailing slide '{}' with no points", title);
        }

        log::debug!("Parsed {} slides from {} bytes of text", slides.len(), text.len());

        Outline::new(slides)
    }
}

/// Parse text with the default [`SlideHeaderParser`].
pub fn parse_outline(text: &str) -> Outline {
    SlideHeaderParser::new().parse(text)
}
