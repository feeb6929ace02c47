//! Export pipeline – document to downloadable PDF in one call.
//!
//! Runs render → layout → paginate → pdf and names the output file after the
//! document owner. Pipeline stage failures surface as [`ExportError`], never
//! a panic.

use thiserror::Error;

use crate::fonts::FontManager;
use crate::layout;
use crate::model::ResumeDocument;
use crate::pagination;
use crate::pdf;
use crate::render;
use crate::template::TemplateVariant;

/// A4 portrait in points, the only page size the exporter emits.
pub const A4_WIDTH_PT: f32 = 595.28;
pub const A4_HEIGHT_PT: f32 = 841.89;

#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    /// Document metadata title. Defaults to the owner's name.
    pub title: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            page_width_pt: A4_WIDTH_PT,
            page_height_pt: A4_HEIGHT_PT,
            title: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("layout failed: {0}")]
    Layout(String),
    #[error("pdf generation failed: {0}")]
    Pdf(String),
}

/// The finished artifact: bytes plus the suggested download name.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Derive the download name from the owner's name: whitespace runs become
/// single underscores, then the `_CV.pdf` suffix. An unnamed document falls
/// back to `My_CV.pdf`.
pub fn file_name(full_name: &str) -> String {
    if full_name.is_empty() {
        return "My_CV.pdf".to_string();
    }
    let mut out = String::with_capacity(full_name.len() + 7);
    let mut in_gap = false;
    for c in full_name.chars() {
        if c.is_whitespace() {
            if !in_gap {
                out.push('_');
                in_gap = true;
            }
        } else {
            out.push(c);
            in_gap = false;
        }
    }
    out.push_str("_CV.pdf");
    out
}

/// Run the full pipeline for one document and template variant.
pub fn export_document(
    document: &ResumeDocument,
    template: TemplateVariant,
    config: &ExportConfig,
) -> Result<ExportedFile, ExportError> {
    let theme = template.theme();
    let tree = render::render(document, template);

    let fonts = FontManager::new();
    let surface = layout::lay_out(&tree, config.page_width_pt, theme.font_family, &fonts)
        .map_err(ExportError::Layout)?;

    let plan = pagination::paginate(&surface, config.page_width_pt, config.page_height_pt);
    log::debug!(
        "exporting {} page(s), surface {:.1}pt tall",
        plan.page_count(),
        surface.height_pt
    );

    let title = match &config.title {
        Some(t) => t.clone(),
        None if document.identity.full_name.is_empty() => "My CV".to_string(),
        None => document.identity.full_name.clone(),
    };

    let bytes = pdf::render_pdf(&surface, &plan, theme.font_family, &title)
        .map_err(ExportError::Pdf)?;

    Ok(ExportedFile {
        file_name: file_name(&document.identity.full_name),
        bytes,
        page_count: plan.page_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_replaces_whitespace_runs() {
        assert_eq!(file_name("Jane Doe"), "Jane_Doe_CV.pdf");
        assert_eq!(file_name("Jane  Marie\tDoe"), "Jane_Marie_Doe_CV.pdf");
        assert_eq!(file_name(" Jane "), "_Jane__CV.pdf");
    }

    #[test]
    fn file_name_falls_back_when_unnamed() {
        assert_eq!(file_name(""), "My_CV.pdf");
    }

    #[test]
    fn default_config_is_a4_portrait() {
        let config = ExportConfig::default();
        assert_eq!(config.page_width_pt, A4_WIDTH_PT);
        assert_eq!(config.page_height_pt, A4_HEIGHT_PT);
        assert!(config.title.is_none());
    }

    #[test]
    fn export_of_an_empty_document_succeeds() {
        let file = export_document(
            &ResumeDocument::new(),
            TemplateVariant::Classic,
            &ExportConfig::default(),
        )
        .unwrap();
        assert_eq!(file.file_name, "My_CV.pdf");
        assert_eq!(file.page_count, 1);
        assert_eq!(&file.bytes[0..5], b"%PDF-");
    }
}
