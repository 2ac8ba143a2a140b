//! Analysis: the boundary between the wizard and the generative service.
//!
//! `AppState` holds an `Option<Arc<dyn ContentGenerator>>`; `None` when no API
//! key is configured. Results come back as opaque JSON and are validated only
//! by the workspace when it accepts them.

pub mod handlers;
pub mod prompts;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::models::results::AnalysisResult;

#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, AppError>;
}

/// Production generator backed by the Anthropic Messages API.
pub struct LlmContentGenerator(pub LlmClient);

#[async_trait]
impl ContentGenerator for LlmContentGenerator {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, AppError> {
        let prompt = prompts::build_analysis_prompt(resume_text, job_description);
        let value: Value = self.0.complete_json(&prompt, JSON_ONLY_SYSTEM).await?;
        Ok(AnalysisResult(value))
    }
}
