//! LLM Client: the only HTTP client for the generative AI service.
//!
//! Feature code reaches it through `analysis::ContentGenerator`, never directly,
//! so the wizard core only ever sees resolved results. Endpoint, model, token
//! budget and retry policy all come from `Config`.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

pub mod prompts;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned no text content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [UserTurn<'a>; 1],
}

#[derive(Debug, Serialize)]
struct UserTurn<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<Block>,
    usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
struct Block {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenUsage {
    input_tokens: u32,
    output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// What a single HTTP attempt produced.
enum Attempt {
    Done(MessagesResponse),
    Retryable(LlmError),
    Fatal(LlmError),
}

#[derive(Clone)]
pub struct LlmClient {
    http: Client,
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    max_attempts: u32,
    backoff: Duration,
}

impl LlmClient {
    pub fn new(config: &Config, api_key: String) -> Result<Self, LlmError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            endpoint: format!(
                "{}/v1/messages",
                config.anthropic_base_url.trim_end_matches('/')
            ),
            api_key,
            model: config.anthropic_model.clone(),
            max_tokens: config.llm_max_tokens,
            max_attempts: config.llm_max_attempts.max(1),
            backoff: config.llm_backoff(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one user turn and returns the first text block of the reply.
    /// 429 and 5xx answers (and transport failures) are retried with
    /// doubling backoff; any other non-success status fails at once.
    pub async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system,
            messages: [UserTurn {
                role: "user",
                content: prompt,
            }],
        };

        let mut attempt = 1;
        let response = loop {
            match self.send_once(&body).await {
                Attempt::Done(response) => break response,
                Attempt::Fatal(e) => return Err(e),
                Attempt::Retryable(e) if attempt >= self.max_attempts => return Err(e),
                Attempt::Retryable(e) => {
                    let delay = self.backoff_for(attempt);
                    warn!(
                        "LLM attempt {attempt}/{} failed ({e}); retrying in {}ms",
                        self.max_attempts,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        };

        if let Some(usage) = &response.usage {
            debug!(
                "LLM call used {} input / {} output tokens",
                usage.input_tokens, usage.output_tokens
            );
        }

        response
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(LlmError::EmptyContent)
    }

    /// `complete`, then parse the reply as JSON. Code fences around the
    /// payload are tolerated.
    pub async fn complete_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let text = self.complete(prompt, system).await?;
        Ok(serde_json::from_str(strip_json_fences(&text))?)
    }

    async fn send_once(&self, body: &MessagesRequest<'_>) -> Attempt {
        let sent = self
            .http
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(body)
            .send()
            .await;
        let response = match sent {
            Ok(response) => response,
            Err(e) => return Attempt::Retryable(LlmError::Http(e)),
        };

        let status = response.status();
        if status.is_success() {
            return match response.json::<MessagesResponse>().await {
                Ok(parsed) => Attempt::Done(parsed),
                Err(e) => Attempt::Fatal(LlmError::Http(e)),
            };
        }

        let raw = response.text().await.unwrap_or_default();
        let error = LlmError::Api {
            status: status.as_u16(),
            message: api_error_message(raw),
        };
        if is_retryable(status) {
            Attempt::Retryable(error)
        } else {
            Attempt::Fatal(error)
        }
    }

    fn backoff_for(&self, attempt: u32) -> Duration {
        self.backoff.saturating_mul(1 << (attempt - 1).min(10))
    }
}

fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Pulls `error.message` out of an Anthropic error body; falls back to the raw body.
fn api_error_message(raw: String) -> String {
    match serde_json::from_str::<ErrorEnvelope>(&raw) {
        Ok(envelope) => envelope.error.message,
        Err(_) => raw,
    }
}

fn strip_json_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
