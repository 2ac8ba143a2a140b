//! Axum route handlers for the wizard. Each one takes the workspace lock,
//! runs a single core operation and answers with the resulting snapshot.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::results::{AnalysisResult, ResumeData};
use crate::state::AppState;
use crate::wizard::navigation::{ActiveApp, QuickStartDestination};
use crate::wizard::presets::JobPreset;
use crate::wizard::{schedule_advance, Outcome, WorkspaceSnapshot};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TransitionResponse {
    pub outcome: Outcome,
    pub workspace: WorkspaceSnapshot,
}

#[derive(Debug, Deserialize)]
pub struct CompleteQuickStartRequest {
    pub analysis_result: AnalysisResult,
    pub job_description: String,
    pub destination: QuickStartDestination,
}

#[derive(Debug, Deserialize)]
pub struct JobDescriptionRequest {
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct SavePresetRequest {
    pub name: String,
    pub job_description: String,
    pub analysis_result: Option<AnalysisResult>,
}

#[derive(Debug, Serialize)]
pub struct PresetListResponse {
    pub presets: Vec<JobPreset>,
    pub active_preset_id: Option<Uuid>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/workspace
pub async fn handle_get_workspace(State(state): State<AppState>) -> Json<WorkspaceSnapshot> {
    Json(state.workspace.lock().await.snapshot())
}

/// POST /api/v1/workspace/reload
pub async fn handle_reload(State(state): State<AppState>) -> Json<WorkspaceSnapshot> {
    let mut ws = state.workspace.lock().await;
    ws.reload();
    Json(ws.snapshot())
}

/// POST /api/v1/phases/:id/navigate
pub async fn handle_navigate(
    State(state): State<AppState>,
    Path(phase_id): Path<String>,
) -> Result<Json<TransitionResponse>, AppError> {
    let mut ws = state.workspace.lock().await;
    let outcome = ws.navigate_to_phase(&phase_id)?;
    Ok(Json(TransitionResponse {
        outcome,
        workspace: ws.snapshot(),
    }))
}

/// POST /api/v1/phases/:id/advance
///
/// Answers immediately with `is_transitioning = true`; the phase change
/// lands after the configured delay.
pub async fn handle_advance(
    State(state): State<AppState>,
    Path(next_id): Path<String>,
) -> (StatusCode, Json<WorkspaceSnapshot>) {
    // The timer runs detached; there is nothing to join on.
    let _timer = schedule_advance(&state.workspace, next_id, state.config.transition_delay()).await;
    let snapshot = state.workspace.lock().await.snapshot();
    (StatusCode::ACCEPTED, Json(snapshot))
}

/// POST /api/v1/apps/:app
pub async fn handle_switch_app(
    State(state): State<AppState>,
    Path(app): Path<String>,
) -> Result<Json<WorkspaceSnapshot>, AppError> {
    let app: ActiveApp = app.parse().map_err(AppError::Validation)?;
    let mut ws = state.workspace.lock().await;
    ws.switch_app(app);
    Ok(Json(ws.snapshot()))
}

/// POST /api/v1/back
pub async fn handle_back(State(state): State<AppState>) -> Json<WorkspaceSnapshot> {
    let mut ws = state.workspace.lock().await;
    ws.back();
    Json(ws.snapshot())
}

/// POST /api/v1/quick-start
pub async fn handle_quick_start(State(state): State<AppState>) -> Json<WorkspaceSnapshot> {
    let mut ws = state.workspace.lock().await;
    ws.start_quick_start();
    Json(ws.snapshot())
}

/// POST /api/v1/quick-start/complete
pub async fn handle_complete_quick_start(
    State(state): State<AppState>,
    Json(request): Json<CompleteQuickStartRequest>,
) -> Result<Json<WorkspaceSnapshot>, AppError> {
    let mut ws = state.workspace.lock().await;
    ws.complete_foundation_preset(
        request.analysis_result,
        request.job_description,
        request.destination,
    )?;
    Ok(Json(ws.snapshot()))
}

/// POST /api/v1/project-wizard
pub async fn handle_project_wizard(State(state): State<AppState>) -> Json<WorkspaceSnapshot> {
    let mut ws = state.workspace.lock().await;
    ws.start_project_wizard();
    Json(ws.snapshot())
}

/// POST /api/v1/continuous-improvement
pub async fn handle_continuous_improvement(
    State(state): State<AppState>,
) -> Result<Json<TransitionResponse>, AppError> {
    let mut ws = state.workspace.lock().await;
    let outcome = ws.go_to_continuous_improvement()?;
    Ok(Json(TransitionResponse {
        outcome,
        workspace: ws.snapshot(),
    }))
}

/// PUT /api/v1/job-description
pub async fn handle_set_job_description(
    State(state): State<AppState>,
    Json(request): Json<JobDescriptionRequest>,
) -> Json<WorkspaceSnapshot> {
    let mut ws = state.workspace.lock().await;
    ws.set_job_description(request.job_description);
    Json(ws.snapshot())
}

/// PUT /api/v1/resume-data
pub async fn handle_set_resume_data(
    State(state): State<AppState>,
    Json(data): Json<ResumeData>,
) -> Result<Json<WorkspaceSnapshot>, AppError> {
    let mut ws = state.workspace.lock().await;
    ws.record_resume_data(data)?;
    Ok(Json(ws.snapshot()))
}

/// GET /api/v1/presets
pub async fn handle_list_presets(State(state): State<AppState>) -> Json<PresetListResponse> {
    let mut ws = state.workspace.lock().await;
    Json(PresetListResponse {
        presets: ws.presets(),
        active_preset_id: ws.active_preset_id(),
    })
}

/// POST /api/v1/presets
pub async fn handle_save_preset(
    State(state): State<AppState>,
    Json(request): Json<SavePresetRequest>,
) -> Result<(StatusCode, Json<JobPreset>), AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    let preset = state.workspace.lock().await.save_preset(
        request.name,
        request.job_description,
        request.analysis_result,
    );
    Ok((StatusCode::CREATED, Json(preset)))
}

/// POST /api/v1/presets/:id/activate
pub async fn handle_activate_preset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<TransitionResponse> {
    let mut ws = state.workspace.lock().await;
    let outcome = ws.activate_preset(id);
    Json(TransitionResponse {
        outcome,
        workspace: ws.snapshot(),
    })
}

/// DELETE /api/v1/presets/:id
pub async fn handle_delete_preset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<TransitionResponse> {
    let mut ws = state.workspace.lock().await;
    let outcome = ws.delete_preset(id);
    if outcome == Outcome::Applied {
        info!("Preset {id} deleted");
    }
    Json(TransitionResponse {
        outcome,
        workspace: ws.snapshot(),
    })
}
