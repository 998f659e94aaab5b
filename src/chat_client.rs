// Single-shot client for an OpenRouter-compatible chat-completion endpoint
use crate::config::{ChatConfig, Credential, API_KEY_VAR};
use crate::error::{PdfChatError, Result};
use crate::types::{ChatRequest, Message};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    credential: Credential,
    api_url: String,
    model: String,
}

impl ChatClient {
    /// Fails with `MissingCredential` when no API key is configured, so no
    /// request is ever attempted without one.
    pub fn new(config: ChatConfig) -> Result<Self> {
        let credential = config
            .credential
            .ok_or(PdfChatError::MissingCredential(API_KEY_VAR))?;

        info!("Initializing chat client for model {}", config.model);
        Ok(Self {
            http: reqwest::Client::new(),
            credential,
            api_url: config.api_url,
            model: config.model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One POST, no retry. Any transport failure or non-2xx status is an error;
    /// a 2xx body is returned as untyped JSON.
    pub async fn send(&self, messages: &[Message]) -> Result<Value> {
        let request = ChatRequest {
            model: &self.model,
            messages,
        };
        debug!(
            "Sending {} message(s) to {} (model {})",
            messages.len(),
            self.api_url,
            self.model
        );

        let response = self
            .http
            .post(&self.api_url)
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.credential.expose()),
            )
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(PdfChatError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Chat endpoint returned {}", status);
            return Err(PdfChatError::HttpStatus { status, body });
        }

        let body = response.json::<Value>().await?;
        debug!("Received response with status {}", status);
        Ok(body)
    }
}
