pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::assets::handlers as assets;
use crate::state::AppState;
use crate::wizard::handlers as wizard;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Wizard state
        .route("/api/v1/workspace", get(wizard::handle_get_workspace))
        .route("/api/v1/workspace/reload", post(wizard::handle_reload))
        .route(
            "/api/v1/phases/:id/navigate",
            post(wizard::handle_navigate),
        )
        .route("/api/v1/phases/:id/advance", post(wizard::handle_advance))
        .route("/api/v1/apps/:app", post(wizard::handle_switch_app))
        .route("/api/v1/back", post(wizard::handle_back))
        .route("/api/v1/quick-start", post(wizard::handle_quick_start))
        .route(
            "/api/v1/quick-start/complete",
            post(wizard::handle_complete_quick_start),
        )
        .route("/api/v1/project-wizard", post(wizard::handle_project_wizard))
        .route(
            "/api/v1/continuous-improvement",
            post(wizard::handle_continuous_improvement),
        )
        .route(
            "/api/v1/job-description",
            put(wizard::handle_set_job_description),
        )
        .route("/api/v1/resume-data", put(wizard::handle_set_resume_data))
        // Presets
        .route(
            "/api/v1/presets",
            get(wizard::handle_list_presets).post(wizard::handle_save_preset),
        )
        .route(
            "/api/v1/presets/:id/activate",
            post(wizard::handle_activate_preset),
        )
        .route("/api/v1/presets/:id", delete(wizard::handle_delete_preset))
        // Asset hub
        .route(
            "/api/v1/assets",
            get(assets::handle_list_assets).post(assets::handle_save_asset),
        )
        .route("/api/v1/assets/:id", delete(assets::handle_delete_asset))
        // Generative analysis
        .route("/api/v1/analysis", post(analysis::handle_analysis))
        .with_state(state)
}
