//! Axum route handler for resume/JD analysis.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::wizard::phases::RESUME_ENHANCEMENT;
use crate::wizard::{schedule_advance, WorkspaceSnapshot};

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub job_description: String,
}

/// POST /api/v1/analysis
///
/// Runs the analysis, stores the result and schedules the move to resume
/// enhancement. Any failure leaves the phases exactly as they were so the
/// user can retry.
pub async fn handle_analysis(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<(StatusCode, Json<WorkspaceSnapshot>), AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    let generator = state.generator.clone().ok_or(AppError::NotImplemented)?;

    {
        let mut ws = state.workspace.lock().await;
        ws.set_resume_text(request.resume_text.clone());
        ws.set_job_description(request.job_description.clone());
    }

    // The workspace lock is not held across the generative call.
    let result = generator
        .analyze(&request.resume_text, &request.job_description)
        .await
        .inspect_err(|e| warn!("Analysis failed, phases left unchanged: {e}"))?;

    state.workspace.lock().await.record_analysis(result)?;
    info!("Analysis stored; advancing to {RESUME_ENHANCEMENT}");

    let _timer = schedule_advance(
        &state.workspace,
        RESUME_ENHANCEMENT,
        state.config.transition_delay(),
    )
    .await;
    let snapshot = state.workspace.lock().await.snapshot();
    Ok((StatusCode::ACCEPTED, Json(snapshot)))
}
