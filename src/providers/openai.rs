use crate::config::env::{API_BASE_VAR, API_KEY_VAR, ChatSettings};
use crate::core::chat::ChatCompletion;
use crate::errors::{AppError, AppResult};
use crate::models::chat::ChatMessage;
use reqwest::blocking::Client as HttpClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// OpenAI-compatible `/chat/completions` client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    settings: ChatSettings,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAiClient {
    pub fn new(settings: ChatSettings) -> Self {
        Self { settings }
    }

    fn endpoint(&self) -> AppResult<String> {
        let base = self
            .settings
            .api_base
            .as_deref()
            .ok_or_else(|| AppError::ChatConfig(format!("{API_BASE_VAR} is not set")))?;
        Ok(format!("{}/chat/completions", base.trim_end_matches('/')))
    }
}

impl ChatCompletion for OpenAiClient {
    fn complete(&self, model: &str, messages: &[ChatMessage]) -> AppResult<String> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::ChatConfig(format!("{API_KEY_VAR} is not set")))?;
        let url = self.endpoint()?;

        let http = HttpClient::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!(%url, model, messages = messages.len(), "POST chat completion");
        let resp: ChatResponse = http
            .post(&url)
            .bearer_auth(api_key)
            .json(&ChatRequest { model, messages })
            .send()?
            .error_for_status()?
            .json()?;

        resp.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AppError::ChatResponse("response has no message content".to_string()))
    }
}
