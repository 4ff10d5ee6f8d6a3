//! Domain types for representing a parsed slide outline.

use serde::{Deserialize, Serialize};

/// One slide's title plus its ordered bullet points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideRecord {
    /// Slide title. Never empty for records produced by the parser.
    pub title: String,

    /// Bullet points in source order.
    pub points: Vec<String>,
}

impl SlideRecord {
    /// Create a new record with the given title and points.
    pub fn new(title: impl Into<String>, points: Vec<String>) -> Self {
        Self {
            title: title.into(),
            points,
        }
    }
}

/// An ordered sequence of slide records, built once from a single input text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outline {
    slides: Vec<SlideRecord>,
}

impl Outline {
    /// Create an outline from records in presentation order.
    pub fn new(slides: Vec<SlideRecord>) -> Self {
        Self { slides }
    }

    /// Records in presentation order.
    pub fn slides(&self) -> &[SlideRecord] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Title of the deck, taken from the first record.
    pub fn deck_title(&self) -> Option<&str> {
        self.slides.first().map(|s| s.title.as_str())
    }

    /// Map records to the slides that get rendered.
    ///
    /// The first record becomes a title slide whose subtitle is its first
    /// point; any further points on it are dropped. Every later record
    /// becomes a content slide with one bullet per point.
    pub fn deck_slides(&self) -> Vec<DeckSlide> {
        self.slides
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                if idx == 0 {
                    DeckSlide::Title {
                        title: record.title.clone(),
                        subtitle: record.points.first().cloned(),
                    }
                } else {
                    DeckSlide::Content {
                        title: record.title.clone(),
                        bullets: record.points.clone(),
                    }
                }
            })
            .collect()
    }
}

/// A slide ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckSlide {
    /// Opening slide with a title and optional subtitle.
    Title {
        title: String,
        subtitle: Option<String>,
    },
    /// Title-and-content slide with bulleted lines.
    Content { title: String, bullets: Vec<String> },
}

impl DeckSlide {
    pub fn title(&self) -> &str {
        match self {
            DeckSlide::Title { title, .. } | DeckSlide::Content { title, .. } => title.as_str(),
        }
    }

    pub fn is_title_slide(&self) -> bool {
        matches!(self, DeckSlide::Title { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, points: &[&str]) -> SlideRecord {
        SlideRecord::new(title, points.iter().map(|p| p.to_string()).collect())
    }

    #[test]
    fn test_empty_outline_has_no_slides() {
        let outline = Outline::default();
        assert!(outline.is_empty());
        assert_eq!(outline.deck_title(), None);
        assert!(outline.deck_slides().is_empty());
    }

    #[test]
    fn test_first_record_becomes_title_slide() {
        let outline = Outline::new(vec![
            record("Quantum Computing", &["A primer", "ignored", "also ignored"]),
            record("Qubits", &["Superposition", "Entanglement"]),
        ]);

        let slides = outline.deck_slides();
        assert_eq!(slides.len(), 2);
        assert_eq!(
            slides[0],
            DeckSlide::Title {
                title: "Quantum Computing".to_string(),
                subtitle: Some("A primer".to_string()),
            }
        );
        assert_eq!(
            slides[1],
            DeckSlide::Content {
                title: "Qubits".to_string(),
                bullets: vec!["Superposition".to_string(), "Entanglement".to_string()],
            }
        );
    }

    #[test]
    fn test_title_slide_without_points_has_no_subtitle() {
        let outline = Outline::new(vec![record("Only a title", &[])]);
        let slides = outline.deck_slides();
        assert_eq!(
            slides[0],
            DeckSlide::Title {
                title: "Only a title".to_string(),
                subtitle: None,
            }
        );
    }

    #[test]
    fn test_one_title_slide_then_content_slides() {
        let outline = Outline::new(vec![
            record("A", &["1"]),
            record("B", &["2"]),
            record("C", &[]),
            record("D", &["3", "4"]),
        ]);
        let slides = outline.deck_slides();
        assert_eq!(slides.iter().filter(|s| s.is_title_slide()).count(), 1);
        assert_eq!(slides.iter().filter(|s| !s.is_title_slide()).count(), 3);
        assert_eq!(slides[2].title(), "C");
    }
}
