// One invocation: validate the path, extract the PDF, converse, report
use crate::chat_client::ChatClient;
use crate::config::{ChatConfig, SYSTEM_PREAMBLE};
use crate::error::{PdfChatError, Result};
use crate::pdf_extraction;
use crate::types::{Message, Reply};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

pub const REPLY_BANNER: &str = "\n=== Reply from OpenRouter ===\n";
pub const DONE_BANNER: &str = "\n=== Done ===\n";
pub const UNEXPECTED_FORMAT: &str = "Unexpected response format:";

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub pdf_file: PathBuf,
    pub prompt: String,
    /// Forward at most this many characters of document text
    pub max_chars: Option<usize>,
}

/// System preamble, then the document, then the prompt if it is non-blank.
pub fn build_messages(document: &str, prompt: &str) -> Vec<Message> {
    let mut messages = vec![Message::system(SYSTEM_PREAMBLE), Message::user(document)];
    let prompt = prompt.trim();
    if !prompt.is_empty() {
        messages.push(Message::user(prompt));
    }
    messages
}

/// Cut `text` to at most `max_chars` characters, never splitting a char.
pub fn truncate_document(mut text: String, max_chars: Option<usize>) -> String {
    let Some(limit) = max_chars else {
        return text;
    };
    if let Some((cut, _)) = text.char_indices().nth(limit) {
        warn!(
            "Document text truncated to {} of {} characters",
            limit,
            text.chars().count()
        );
        text.truncate(cut);
    }
    text
}

pub async fn run<W: Write>(options: &Options, config: ChatConfig, out: &mut W) -> Result<()> {
    // Validate
    if !options.pdf_file.is_file() {
        return Err(PdfChatError::FileNotFound(options.pdf_file.clone()));
    }

    // Extract
    let start = Instant::now();
    let document = pdf_extraction::extract_text(&options.pdf_file)?;
    debug!("Text extraction took {:?}", start.elapsed());
    if document.trim().is_empty() {
        warn!("{} contains no extractable text", options.pdf_file.display());
    }
    let document = truncate_document(document, options.max_chars);

    // Converse
    let client = ChatClient::new(config)?;
    let messages = build_messages(&document, &options.prompt);
    info!(
        "Asking {} about {} ({} message(s))",
        client.model(),
        options.pdf_file.display(),
        messages.len()
    );
    let start = Instant::now();
    let response = client.send(&messages).await?;
    info!("Chat exchange took {:?}", start.elapsed());

    // Report
    match Reply::from_response(response) {
        Reply::Text(text) => {
            writeln!(out, "{}", REPLY_BANNER)?;
            writeln!(out, "{}", text)?;
            writeln!(out, "{}", DONE_BANNER)?;
            Ok(())
        }
        Reply::Unrecognized(raw) => {
            writeln!(out, "{}", UNEXPECTED_FORMAT)?;
            // serde_json keeps non-ASCII characters as-is
            let pretty = serde_json::to_string_pretty(&raw).unwrap_or_else(|_| raw.to_string());
            writeln!(out, "{}", pretty)?;
            Err(PdfChatError::UnexpectedResponseShape(raw))
        }
    }
}
