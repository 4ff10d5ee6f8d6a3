//! Package-level parts of a generated presentation.
//!
//! The theme, master and the two layouts are fixed and shipped as resources.
//! Parts that depend on the slide count are generated here.

use deck_core::{Error, Result};
use quick_xml::escape::escape;
use std::fmt::Write as FmtWrite;

pub const THEME_XML: &str = include_str!("../resources/theme/theme1.xml");
pub const SLIDE_MASTER_XML: &str = include_str!("../resources/slideMasters/slideMaster1.xml");
/// "Title Slide" layout.
pub const TITLE_LAYOUT_XML: &str = include_str!("../resources/slideLayouts/slideLayout1.xml");
/// "Title and Content" layout.
pub const CONTENT_LAYOUT_XML: &str = include_str!("../resources/slideLayouts/slideLayout2.xml");
pub const PRES_PROPS_XML: &str = include_str!("../resources/presProps.xml");
pub const VIEW_PROPS_XML: &str = include_str!("../resources/viewProps.xml");
pub const TABLE_STYLES_XML: &str = include_str!("../resources/tableStyles.xml");

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE_PROPS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_EXTENDED_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_SLIDE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_THEME: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
const REL_PRES_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps";
const REL_VIEW_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/viewProps";
const REL_TABLE_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles";

/// Slide width in EMUs (10 inches, 4:3).
pub const SLIDE_WIDTH: i64 = 9_144_000;
/// Slide height in EMUs (7.5 inches).
pub const SLIDE_HEIGHT: i64 = 6_858_000;

/// First `p:sldId` id; PowerPoint requires ids of at least 256.
const FIRST_SLIDE_ID: usize = 256;
/// Relationship ids rId1..rId5 in presentation.xml.rels are fixed parts.
const FIRST_SLIDE_REL: usize = 6;

/// Which layout a slide part is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Title,
    Content,
}

impl LayoutKind {
    pub fn part_name(&self) -> &'static str {
        match self {
            LayoutKind::Title => "slideLayout1.xml",
            LayoutKind::Content => "slideLayout2.xml",
        }
    }
}

/// Whether `c` matches the XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Drop characters XML 1.0 cannot carry, then escape markup.
pub(crate) fn escape_text(text: &str) -> String {
    let cleaned: String = text.chars().filter(|&c| is_xml_char(c)).collect();
    escape(cleaned.as_str()).into_owned()
}

fn fmt_err(e: std::fmt::Error) -> Error {
    Error::XmlError(e.to_string())
}

/// Relationship id of the n-th slide (1-based) in presentation.xml.rels.
pub fn slide_rel_id(number: usize) -> String {
    format!("rId{}", FIRST_SLIDE_REL + number - 1)
}

pub fn content_types_xml(slide_count: usize) -> Result<String> {
    const PML: &str = "application/vnd.openxmlformats-officedocument.presentationml";

    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECL);
    xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);

    let overrides = [
        ("/ppt/presentation.xml", format!("{PML}.presentation.main+xml")),
        ("/ppt/slideMasters/slideMaster1.xml", format!("{PML}.slideMaster+xml")),
        ("/ppt/slideLayouts/slideLayout1.xml", format!("{PML}.slideLayout+xml")),
        ("/ppt/slideLayouts/slideLayout2.xml", format!("{PML}.slideLayout+xml")),
        ("/ppt/presProps.xml", format!("{PML}.presProps+xml")),
        ("/ppt/viewProps.xml", format!("{PML}.viewProps+xml")),
        ("/ppt/tableStyles.xml", format!("{PML}.tableStyles+xml")),
        (
            "/ppt/theme/theme1.xml",
            "application/vnd.openxmlformats-officedocument.theme+xml".to_string(),
        ),
        (
            "/docProps/core.xml",
            "application/vnd.openxmlformats-package.core-properties+xml".to_string(),
        ),
        (
            "/docProps/app.xml",
            "application/vnd.openxmlformats-officedocument.extended-properties+xml".to_string(),
        ),
    ];
    for (part, content_type) in &overrides {
        write!(xml, r#"<Override PartName="{}" ContentType="{}"/>"#, part, content_type)
            .map_err(fmt_err)?;
    }

    for number in 1..=slide_count {
        write!(
            xml,
            r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="{}.slide+xml"/>"#,
            number, PML
        )
        .map_err(fmt_err)?;
    }

    xml.push_str("</Types>");
    Ok(xml)
}

/// Builds a relationships part from (id, type, target) triples.
fn relationships_xml(rels: &[(String, &str, String)]) -> Result<String> {
    let mut xml = String::with_capacity(256 + rels.len() * 160);
    xml.push_str(XML_DECL);
    write!(xml, r#"<Relationships xmlns="{}">"#, REL_NS).map_err(fmt_err)?;
    for (id, rel_type, target) in rels {
        write!(
            xml,
            r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
            id, rel_type, target
        )
        .map_err(fmt_err)?;
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

pub fn root_rels_xml() -> Result<String> {
    relationships_xml(&[
        ("rId1".to_string(), REL_OFFICE_DOCUMENT, "ppt/presentation.xml".to_string()),
        ("rId2".to_string(), REL_CORE_PROPS, "docProps/core.xml".to_string()),
        ("rId3".to_string(), REL_EXTENDED_PROPS, "docProps/app.xml".to_string()),
    ])
}

pub fn presentation_rels_xml(slide_count: usize) -> Result<String> {
    let mut rels = vec![
        ("rId1".to_string(), REL_SLIDE_MASTER, "slideMasters/slideMaster1.xml".to_string()),
        ("rId2".to_string(), REL_THEME, "theme/theme1.xml".to_string()),
        ("rId3".to_string(), REL_PRES_PROPS, "presProps.xml".to_string()),
        ("rId4".to_string(), REL_VIEW_PROPS, "viewProps.xml".to_string()),
        ("rId5".to_string(), REL_TABLE_STYLES, "tableStyles.xml".to_string()),
    ];
    for number in 1..=slide_count {
        rels.push((slide_rel_id(number), REL_SLIDE, format!("slides/slide{}.xml", number)));
    }
    relationships_xml(&rels)
}

pub fn slide_master_rels_xml() -> Result<String> {
    relationships_xml(&[
        ("rId1".to_string(), REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml".to_string()),
        ("rId2".to_string(), REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout2.xml".to_string()),
        ("rId3".to_string(), REL_THEME, "../theme/theme1.xml".to_string()),
    ])
}

pub fn slide_layout_rels_xml() -> Result<String> {
    relationships_xml(&[(
        "rId1".to_string(),
        REL_SLIDE_MASTER,
        "../slideMasters/slideMaster1.xml".to_string(),
    )])
}

pub fn slide_rels_xml(layout: LayoutKind) -> Result<String> {
    relationships_xml(&[(
        "rId1".to_string(),
        REL_SLIDE_LAYOUT,
        format!("../slideLayouts/{}", layout.part_name()),
    )])
}

pub fn presentation_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(1024 + slide_count * 48);
    xml.push_str(XML_DECL);
    xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);
    xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);

    if slide_count > 0 {
        xml.push_str("<p:sldIdLst>");
        for number in 1..=slide_count {
            write!(
                xml,
                r#"<p:sldId id="{}" r:id="{}"/>"#,
                FIRST_SLIDE_ID + number - 1,
                slide_rel_id(number)
            )
            .map_err(fmt_err)?;
        }
        xml.push_str("</p:sldIdLst>");
    }

    write!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}" type="screen4x3"/>"#,
        SLIDE_WIDTH, SLIDE_HEIGHT
    )
    .map_err(fmt_err)?;
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");
    Ok(xml)
}

pub fn core_props_xml(title: Option<&str>) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECL);
    xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);
    if let Some(title) = title {
        xml.push_str("<dc:title>");
        xml.push_str(&escape_text(title));
        xml.push_str("</dc:title>");
    }
    xml.push_str("<dc:creator>deck-gen</dc:creator>");
    xml.push_str("</cp:coreProperties>");
    xml
}

pub fn app_props_xml(slide_count: usize) -> String {
    format!(
        "{}{}<Application>deck-gen</Application><PresentationFormat>On-screen Show (4:3)</PresentationFormat><Slides>{}</Slides></Properties>",
        XML_DECL,
        r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
        slide_count
    )
}
