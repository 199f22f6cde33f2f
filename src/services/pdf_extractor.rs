// PDF Text Extraction
// Wraps pdf-extract so callers get text ready for analysis

use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("Failed to read PDF: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to read PDF: {0}")]
    Extract(String),
    #[error("PDF contains no extractable text (scanned or image-only?)")]
    NoText,
}

/// Extract the text of every page of the PDF at `path`.
pub fn extract_text_from_pdf(path: &Path) -> Result<String, PdfError> {
    let bytes = std::fs::read(path)?;
    let text = extract_text_from_pdf_bytes(&bytes)?;
    info!(path = %path.display(), chars = text.chars().count(), "pdf.loaded");
    Ok(text)
}

/// Extract text from in-memory PDF bytes.
///
/// pdf-extract can panic on malformed documents; that is reported as an
/// extraction error.
pub fn extract_text_from_pdf_bytes(bytes: &[u8]) -> Result<String, PdfError> {
    let text = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| PdfError::Extract("malformed PDF document".to_string()))?
        .map_err(|e| {
            warn!(error = %e, "pdf.extract_failed");
            PdfError::Extract(e.to_string())
        })?;

    if text.trim().is_empty() {
        return Err(PdfError::NoText);
    }
    Ok(text)
}

/// Whether a path looks like a PDF by extension.
pub fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
