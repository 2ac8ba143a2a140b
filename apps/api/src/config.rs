use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::wizard::transition::DEFAULT_TRANSITION_DELAY;

const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-5";

/// Where wizard slots are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Memory,
    File,
    Redis,
}

impl FromStr for StorageKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageKind::Memory),
            "file" => Ok(StorageKind::File),
            "redis" => Ok(StorageKind::Redis),
            other => bail!("STORAGE_BACKEND must be one of memory, file, redis (got '{other}')"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Everything has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage_backend: StorageKind,
    pub state_dir: String,
    pub redis_url: Option<String>,
    pub anthropic_api_key: Option<String>,
    /// Base URL of the Messages API, without the `/v1/messages` path.
    pub anthropic_base_url: String,
    pub anthropic_model: String,
    pub llm_max_tokens: u32,
    /// Total attempts per LLM call, including the first.
    pub llm_max_attempts: u32,
    /// First retry delay; each later retry doubles it.
    pub llm_backoff_ms: u64,
    pub transition_delay_ms: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            storage_backend: std::env::var("STORAGE_BACKEND")
                .unwrap_or_else(|_| "file".to_string())
                .parse()?,
            state_dir: std::env::var("STATE_DIR").unwrap_or_else(|_| ".catalyst-state".to_string()),
            redis_url: optional_env("REDIS_URL"),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            anthropic_base_url: std::env::var("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_ANTHROPIC_BASE_URL.to_string()),
            anthropic_model: std::env::var("ANTHROPIC_MODEL")
                .unwrap_or_else(|_| DEFAULT_ANTHROPIC_MODEL.to_string()),
            llm_max_tokens: parsed_env("LLM_MAX_TOKENS", 4096)?,
            llm_max_attempts: parsed_env("LLM_MAX_ATTEMPTS", 3)?,
            llm_backoff_ms: parsed_env("LLM_BACKOFF_MS", 1000)?,
            transition_delay_ms: parsed_env(
                "TRANSITION_DELAY_MS",
                DEFAULT_TRANSITION_DELAY.as_millis() as u64,
            )?,
            port: parsed_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn transition_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.transition_delay_ms)
    }

    pub fn llm_backoff(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.llm_backoff_ms)
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            storage_backend: StorageKind::Memory,
            state_dir: String::new(),
            redis_url: None,
            anthropic_api_key: None,
            anthropic_base_url: DEFAULT_ANTHROPIC_BASE_URL.to_string(),
            anthropic_model: DEFAULT_ANTHROPIC_MODEL.to_string(),
            llm_max_tokens: 1024,
            llm_max_attempts: 3,
            llm_backoff_ms: 1,
            transition_delay_ms: DEFAULT_TRANSITION_DELAY.as_millis() as u64,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}

/// Unset or blank means `default`; anything else must parse.
fn parsed_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
