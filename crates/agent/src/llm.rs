use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use farely_core::config::{LlmConfig, LlmProvider};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: ChatRole::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: ChatRole::Assistant, content: content.into() }
    }
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("invalid llm configuration: {0}")]
    Configuration(String),
    #[error("model request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("model service returned status {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("model reply carried no choices")]
    EmptyReply,
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError>;
}

/// OpenAI-compatible chat-completions client. Both supported providers
/// (openai, ollama) speak this wire shape.
pub struct HttpLlmClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
}

impl HttpLlmClient {
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = &config.api_key {
            let bearer = format!("Bearer {}", api_key.expose_secret());
            let mut header = HeaderValue::from_str(&bearer).map_err(|_| {
                LlmError::Configuration(
                    "llm.api_key contains characters that cannot be sent in a header".to_string(),
                )
            })?;
            header.set_sensitive(true);
            headers.insert(AUTHORIZATION, header);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        let base = match (&config.base_url, config.provider) {
            (Some(base_url), _) => base_url.as_str(),
            (None, LlmProvider::OpenAi) => "https://api.openai.com",
            (None, LlmProvider::Ollama) => "http://localhost:11434",
        };

        Ok(Self {
            http,
            endpoint: format!("{}/v1/chat/completions", base.trim_end_matches('/')),
            model: config.model.clone(),
        })
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct CompletionReply {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: String,
}

#[async_trait]
impl LlmClient for HttpLlmClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&CompletionRequest { model: &self.model, messages })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                detail: truncate_detail(&detail),
            });
        }

        let reply: CompletionReply = response.json().await?;
        reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(LlmError::EmptyReply)
    }
}

// Upstream error bodies can be arbitrarily large; keep log lines bounded.
fn truncate_detail(detail: &str) -> String {
    const MAX_DETAIL: usize = 200;
    let trimmed = detail.trim();
    if trimmed.len() <= MAX_DETAIL {
        return trimmed.to_string();
    }
    let mut cut = MAX_DETAIL;
    while !trimmed.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &trimmed[..cut])
}
