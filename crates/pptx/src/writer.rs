//! PPTX package writer.

use crate::slide::{layout_for, slide_xml};
use crate::style::SlideStyle;
use crate::template;
use crate::DEFAULT_BASE_NAME;
use deck_core::{Error, Outline, Result};
use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Writes an [`Outline`] as a PowerPoint file.
pub struct PptxWriter {
    style: SlideStyle,
}

impl PptxWriter {
    /// Create a writer with the default slide style.
    pub fn new() -> Self {
        Self {
            style: SlideStyle::default(),
        }
    }

    /// Write the package to a seekable sink and hand the sink back.
    pub fn write<W: Write + Seek>(&self, outline: &Outline, writer: W) -> Result<W> {
        let slides = outline.deck_slides();
        let count = slides.len();
        if count == 0 {
            log::warn!("Outline is empty; writing a presentation with no slides");
        }

        let mut zip = ZipWriter::new(writer);

        add_part(&mut zip, "[Content_Types].xml", &template::content_types_xml(count)?)?;
        add_part(&mut zip, "_rels/.rels", &template::root_rels_xml()?)?;
        add_part(&mut zip, "docProps/core.xml", &template::core_props_xml(outline.deck_title()))?;
        add_part(&mut zip, "docProps/app.xml", &template::app_props_xml(count))?;

        add_part(&mut zip, "ppt/presentation.xml", &template::presentation_xml(count)?)?;
        add_part(
            &mut zip,
            "ppt/_rels/presentation.xml.rels",
            &template::presentation_rels_xml(count)?,
        )?;
        add_part(&mut zip, "ppt/presProps.xml", template::PRES_PROPS_XML)?;
        add_part(&mut zip, "ppt/viewProps.xml", template::VIEW_PROPS_XML)?;
        add_part(&mut zip, "ppt/tableStyles.xml", template::TABLE_STYLES_XML)?;
        add_part(&mut zip, "ppt/theme/theme1.xml", template::THEME_XML)?;

        add_part(&mut zip, "ppt/slideMasters/slideMaster1.xml", template::SLIDE_MASTER_XML)?;
        add_part(
            &mut zip,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            &template::slide_master_rels_xml()?,
        )?;

        let layouts = [
            ("slideLayout1.xml", template::TITLE_LAYOUT_XML),
            ("slideLayout2.xml", template::CONTENT_LAYOUT_XML),
        ];
        for (name, xml) in layouts {
            add_part(&mut zip, &format!("ppt/slideLayouts/{}", name), xml)?;
            add_part(
                &mut zip,
                &format!("ppt/slideLayouts/_rels/{}.rels", name),
                &template::slide_layout_rels_xml()?,
            )?;
        }

        for (idx, slide) in slides.iter().enumerate() {
            let number = idx + 1;
            let kind = if slide.is_title_slide() { "title" } else { "content" };
            log::debug!("Writing {} slide {}: {}", kind, number, slide.title());

            add_part(
                &mut zip,
                &format!("ppt/slides/slide{}.xml", number),
                &slide_xml(slide, &self.style)?,
            )?;
            add_part(
                &mut zip,
                &format!("ppt/slides/_rels/slide{}.xml.rels", number),
                &template::slide_rels_xml(layout_for(slide))?,
            )?;
        }

        zip.finish()
            .map_err(|e| Error::ZipError(format!("Failed to finish archive: {}", e)))
    }

    /// Render to an in-memory buffer.
    pub fn to_bytes(&self, outline: &Outline) -> Result<Vec<u8>> {
        Ok(self.write(outline, Cursor::new(Vec::new()))?.into_inner())
    }

    /// Write `<base_name>.pptx` under `output_dir`, creating the directory if needed.
    pub fn save(&self, outline: &Outline, output_dir: &Path, base_name: &str) -> Result<PathBuf> {
        let path = output_path(output_dir, base_name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(&path)?;
        self.write(outline, file)?;

        log::info!("Saved {} slides to {}", outline.len(), path.display());
        Ok(path)
    }
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of the presentation file for a user-chosen base name.
///
/// A trailing `.pptx` on the base name is not doubled. A base name with
/// nothing before the extension falls back to [`DEFAULT_BASE_NAME`].
pub fn output_path(output_dir: &Path, base_name: &str) -> PathBuf {
    let base = base_name.trim();
    let stem = match base.len().checked_sub(".pptx".len()) {
        Some(split) if base.is_char_boundary(split) && base[split..].eq_ignore_ascii_case(".pptx") => {
            &base[..split]
        }
        _ => base,
    };
    let stem = if stem.trim().is_empty() { DEFAULT_BASE_NAME } else { stem };
    output_dir.join(format!("{}.pptx", stem))
}

fn add_part<W: Write + Seek>(zip: &mut ZipWriter<W>, path: &str, content: &str) -> Result<()> {
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file(path, options)
        .map_err(|e| Error::ZipError(format!("Failed to start '{}': {}", path, e)))?;
    zip.write_all(content.as_bytes())?;
    Ok(())
}
