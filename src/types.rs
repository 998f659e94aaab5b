// Core types for the chat exchange
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Who authored a message in the conversation
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Request body for a chat-completion call. Message order is turn order.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
}

/// What came back from the endpoint, decided once at the boundary
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// `choices[0].message.content` was present and a string
    Text(String),
    /// Anything else, kept whole for diagnostics
    Unrecognized(Value),
}

impl Reply {
    pub fn from_response(response: Value) -> Self {
        match response
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
        {
            Some(text) => Reply::Text(text.to_owned()),
            None => Reply::Unrecognized(response),
        }
    }
}
