// Plain text extraction - Pure Rust via lopdf
use crate::error::{PdfChatError, Result};
use lopdf::Document;
use std::path::Path;
use tracing::debug;

/// Text of one page, numbered from 1 as lopdf numbers them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub number: u32,
    pub text: String,
}

/// Load a PDF document using lopdf
pub fn load_pdf(path: &Path) -> Result<Document> {
    Document::load(path).map_err(|source| PdfChatError::DocumentOpen {
        path: path.to_path_buf(),
        source,
    })
}

/// Extract every page in ascending page order. Any failing page fails the
/// whole document; no partial result is returned.
pub fn extract_pages(path: &Path) -> Result<Vec<PageText>> {
    let document = load_pdf(path)?;
    let pages = document.get_pages();

    pages
        .keys()
        .map(|&number| {
            document
                .extract_text(&[number])
                .map(|text| PageText { number, text })
                .map_err(|source| PdfChatError::DocumentOpen {
                    path: path.to_path_buf(),
                    source,
                })
        })
        .collect()
}

/// Concatenate the text of all pages, in order, with nothing added between them.
/// A document with no pages yields an empty string.
pub fn extract_text(path: &Path) -> Result<String> {
    let pages = extract_pages(path)?;
    let page_count = pages.len();
    let text: String = pages.into_iter().map(|page| page.text).collect();
    debug!(
        "extracted {} chars from {} page(s) of {}",
        text.chars().count(),
        page_count,
        path.display()
    );
    Ok(text)
}
