// PDF extraction module
pub mod text;

pub use text::{extract_pages, extract_text, load_pdf, PageText};
