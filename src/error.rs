use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PdfChatError>;

#[derive(Debug, Error)]
pub enum PdfChatError {
    #[error("File '{}' does not exist.", .0.display())]
    FileNotFound(PathBuf),

    #[error("Cannot open PDF file '{}': {source}", path.display())]
    DocumentOpen {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    #[error("{0} environment variable is not set.")]
    MissingCredential(&'static str),

    #[error("{var} must be a whole number of characters, got '{value}'.")]
    InvalidSetting { var: &'static str, value: String },

    #[error("API request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API request failed: HTTP {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Unexpected response format")]
    UnexpectedResponseShape(serde_json::Value),

    #[error("Cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

impl PdfChatError {
    /// Every failure ends the invocation with the same status.
    pub fn exit_code(&self) -> u8 {
        1
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::HttpStatus { .. })
    }
}
