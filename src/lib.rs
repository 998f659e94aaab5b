// pdf-chat: extract text from a PDF and ask a chat-completion API about it
pub mod chat_client;
pub mod config;
pub mod error;
pub mod pdf_extraction;
pub mod session;
pub mod types;

pub use chat_client::ChatClient;
pub use config::{ChatConfig, Credential};
pub use error::{PdfChatError, Result};
pub use session::{build_messages, run, Options};
pub use types::{Message, Reply, Role};
