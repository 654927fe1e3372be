use crate::config::Settings;
use crate::models::*;
use anyhow::{Context, Result};
use reqwest::Client;
use uuid::Uuid;

/// Chat-completions client bound to one credential. Holds no per-request
/// state, so a single instance can be shared by every caller.
#[derive(Debug)]
pub struct OpenAiService {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiService {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key: settings.api_key.clone(),
            base_url: settings.base_url.clone(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Sends one request and returns the first choice's text. One attempt,
    /// no retries.
    pub async fn complete(&self, request: &ChatRequest) -> Result<String> {
        let request_id = Uuid::new_v4();
        log::info!(
            "[{}] chat completion: model={} messages={} max_tokens={}",
            request_id,
            request.model,
            request.messages.len(),
            request.max_tokens
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .context("request to the OpenAI API failed")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::warn!("[{}] OpenAI API returned {}", request_id, status);
            return Err(anyhow::anyhow!(
                "OpenAI API error ({}): {}",
                status,
                api_error_message(&error_text)
            ));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .context("failed to decode OpenAI API response")?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| anyhow::anyhow!("OpenAI API response contained no message content"))?;

        log::info!("[{}] received {} characters", request_id, content.len());
        Ok(content)
    }
}

/// Pulls `error.message` out of an OpenAI error body, falling back to the raw
/// text for anything else.
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(parsed) => match parsed.error.kind {
            Some(kind) => format!("{} ({})", parsed.error.message, kind),
            None => parsed.error.message,
        },
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
