//! Slide part generation.

use crate::style::{hundredths, SlideStyle};
use crate::template::{escape_text, LayoutKind};
use deck_core::{DeckSlide, Error, Result};
use std::fmt::Write as FmtWrite;

const SLIDE_OPEN: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>"#;
const SLIDE_CLOSE: &str = r#"</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"#;

/// Layout a deck slide is rendered with.
pub fn layout_for(slide: &DeckSlide) -> LayoutKind {
    match slide {
        DeckSlide::Title { .. } => LayoutKind::Title,
        DeckSlide::Content { .. } => LayoutKind::Content,
    }
}

/// Render one slide part.
pub fn slide_xml(slide: &DeckSlide, style: &SlideStyle) -> Result<String> {
    let mut xml = String::with_capacity(2048);
    xml.push_str(SLIDE_OPEN);

    match slide {
        DeckSlide::Title { title, subtitle } => {
            write_placeholder(&mut xml, 2, "Title 1", r#"type="ctrTitle""#)?;
            write_paragraph(&mut xml, title, style.title_size, None)?;
            xml.push_str("</p:txBody></p:sp>");

            if let Some(subtitle) = subtitle {
                write_placeholder(&mut xml, 3, "Subtitle 2", r#"type="subTitle" idx="1""#)?;
                write_paragraph(&mut xml, subtitle, style.subtitle_size, None)?;
                xml.push_str("</p:txBody></p:sp>");
            }
        }
        DeckSlide::Content { title, bullets } => {
            write_placeholder(&mut xml, 2, "Title 1", r#"type="title""#)?;
            write_paragraph(&mut xml, title, style.heading_size, None)?;
            xml.push_str("</p:txBody></p:sp>");

            write_placeholder(&mut xml, 3, "Content Placeholder 2", r#"idx="1""#)?;
            if bullets.is_empty() {
                xml.push_str(r#"<a:p><a:endParaRPr lang="en-US" dirty="0"/></a:p>"#);
            }
            for bullet in bullets {
                write_paragraph(&mut xml, bullet, style.bullet_size, Some(style.bullet_space_after))?;
            }
            xml.push_str("</p:txBody></p:sp>");
        }
    }

    xml.push_str(SLIDE_CLOSE);
    Ok(xml)
}

/// Open a placeholder shape up to and including its `a:lstStyle`.
fn write_placeholder(xml: &mut String, id: u32, name: &str, ph_attrs: &str) -> Result<()> {
    write!(
        xml,
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="{}"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph {}/></p:nvPr></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr><a:normAutofit/></a:bodyPr><a:lstStyle/>"#,
        id, name, ph_attrs
    )
    .map_err(|e| Error::XmlError(e.to_string()))
}

/// One paragraph with a single run at `size` points.
fn write_paragraph(xml: &mut String, text: &str, size: u32, space_after: Option<u32>) -> Result<()> {
    xml.push_str("<a:p>");
    if let Some(space) = space_after {
        write!(
            xml,
            r#"<a:pPr lvl="0"><a:spcAft><a:spcPts val="{}"/></a:spcAft></a:pPr>"#,
            hundredths(space)
        )
        .map_err(|e| Error::XmlError(e.to_string()))?;
    }
    write!(
        xml,
        r#"<a:r><a:rPr lang="en-US" sz="{}" dirty="0"/><a:t>{}</a:t></a:r></a:p>"#,
        hundredths(size),
        escape_text(text)
    )
    .map_err(|e| Error::XmlError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(title: &str, bullets: &[&str]) -> DeckSlide {
        DeckSlide::Content {
            title: title.to_string(),
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
        }
    }

    #[test]
    fn test_title_slide_sizes() {
        let slide = DeckSlide::Title {
            title: "Deck".to_string(),
            subtitle: Some("Sub".to_string()),
        };
        let xml = slide_xml(&slide, &SlideStyle::default()).unwrap();

        assert!(xml.contains(r#"<p:ph type="ctrTitle"/>"#));
        assert!(xml.contains(r#"<p:ph type="subTitle" idx="1"/>"#));
        assert!(xml.contains(r#"sz="3200" dirty="0"/><a:t>Deck</a:t>"#));
        assert!(xml.contains(r#"sz="1800" dirty="0"/><a:t>Sub</a:t>"#));
        assert_eq!(layout_for(&slide), LayoutKind::Title);
    }

    #[test]
    fn test_title_slide_without_subtitle() {
        let slide = DeckSlide::Title {
            title: "Deck".to_string(),
            subtitle: None,
        };
        let xml = slide_xml(&slide, &SlideStyle::default()).unwrap();
        assert!(!xml.contains("subTitle"));
    }

    #[test]
    fn test_content_slide_bullets() {
        let slide = content("Body", &["One", "Two"]);
        let xml = slide_xml(&slide, &SlideStyle::default()).unwrap();

        assert!(xml.contains(r#"<p:ph type="title"/>"#));
        assert!(xml.contains(r#"sz="2400" dirty="0"/><a:t>Body</a:t>"#));
        assert_eq!(xml.matches(r#"<a:spcPts val="1200"/>"#).count(), 2);
        assert_eq!(xml.matches(r#"sz="1400""#).count(), 2);
        assert_eq!(layout_for(&slide), LayoutKind::Content);
    }

    #[test]
    fn test_content_slide_without_bullets_has_empty_paragraph() {
        let xml = slide_xml(&content("Empty", &[]), &SlideStyle::default()).unwrap();
        assert!(xml.contains("<a:endParaRPr"));
    }

    #[test]
    fn test_text_is_escaped() {
        let xml = slide_xml(&content("Q&A <live>", &["\"quotes\" & 'ticks'"]), &SlideStyle::default())
            .unwrap();
        assert!(xml.contains("Q&amp;A &lt;live&gt;"));
        assert!(!xml.contains("<live>"));
    }

    #[test]
    fn test_control_characters_dropped() {
        let xml = slide_xml(&content("T\u{1b}[1m", &["a\u{0}b\u{7}c\td", "x\u{FFFF}"]), &SlideStyle::default()).unwrap();
        assert!(xml.contains("<a:t>T[1m</a:t>"));
        assert!(xml.contains("<a:t>abc\td</a:t>"));
        assert!(xml.contains("<a:t>x</a:t>"));
    }

    #[test]
    fn test_custom_style() {
        let style = SlideStyle {
            bullet_size: 20,
            ..SlideStyle::default()
        };
        let xml = slide_xml(&content("T", &["x"]), &style).unwrap();
        assert!(xml.contains(r#"sz="2000""#));
    }
}
