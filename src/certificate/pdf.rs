//! SVG page to PDF conversion

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PdfError {
    #[error("failed to parse certificate SVG: {0}")]
    SvgParse(String),
    #[error("failed to convert SVG to PDF: {0}")]
    Convert(String),
}

/// Convert a rendered certificate page to PDF bytes
///
/// Text is laid out with system fonts, falling back to Arial for the generic
/// families used by the page.
pub fn render_pdf(svg: &str) -> Result<Vec<u8>, PdfError> {
    let mut opt = svg2pdf::usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    opt.font_family = "Arial".to_string();

    let tree = svg2pdf::usvg::Tree::from_str(svg, &opt).map_err(|e| PdfError::SvgParse(e.to_string()))?;

    let pdf = svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|e| PdfError::Convert(e.to_string()))?;
    tracing::debug!(bytes = pdf.len(), "rendered certificate PDF");
    Ok(pdf)
}
