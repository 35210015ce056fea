use tracing::info;

use crate::error::ExtractError;

/// Text layer of every page, in page order, one newline between pages.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;

    info!(pages = pages.len(), "extracted PDF text layer");

    Ok(pages.join("\n"))
}
