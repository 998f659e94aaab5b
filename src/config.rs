// Configuration constants and environment lookup for pdf-chat
use crate::error::{PdfChatError, Result};
use std::env;
use std::fmt;

// Endpoint and model
pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-r1:free";
pub const SYSTEM_PREAMBLE: &str = "You are a helpful assistant.";

// Environment variables
pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";
pub const API_URL_VAR: &str = "PDF_CHAT_API_URL";
pub const MODEL_VAR: &str = "PDF_CHAT_MODEL";
pub const MAX_CHARS_VAR: &str = "PDF_CHAT_MAX_CHARS";

/// Bearer token for the chat API. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` for an empty or whitespace-only secret.
    pub fn new(secret: impl Into<String>) -> Option<Self> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            None
        } else {
            Some(Self(secret))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub credential: Option<Credential>,
    pub api_url: String,
    pub model: String,
}

impl ChatConfig {
    /// Read the process environment once, after any `.env` file has been loaded.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            credential: lookup(API_KEY_VAR).and_then(Credential::new),
            api_url: non_blank(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            model: non_blank(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    pub fn with_credential(mut self, secret: impl Into<String>) -> Self {
        self.credential = Credential::new(secret);
        self
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }
}

/// Document size limit from `PDF_CHAT_MAX_CHARS`. Unset or blank means no limit.
pub fn max_chars_from_env() -> Result<Option<usize>> {
    max_chars_from_lookup(|key| env::var(key).ok())
}

pub fn max_chars_from_lookup<F>(lookup: F) -> Result<Option<usize>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(MAX_CHARS_VAR).filter(|v| !v.trim().is_empty()) {
        None => Ok(None),
        Some(value) => {
            let parsed = value.trim().parse::<usize>();
            match parsed {
                Ok(limit) => Ok(Some(limit)),
                Err(_) => Err(PdfChatError::InvalidSetting {
                    var: MAX_CHARS_VAR,
                    value,
                }),
            }
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
