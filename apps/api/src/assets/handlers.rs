use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::assets::{AssetKind, SavedAsset};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssetQuery {
    pub kind: Option<AssetKind>,
}

#[derive(Debug, Deserialize)]
pub struct SaveAssetRequest {
    pub kind: AssetKind,
    pub title: String,
    pub content: Value,
}

/// GET /api/v1/assets
pub async fn handle_list_assets(
    State(state): State<AppState>,
    Query(query): Query<AssetQuery>,
) -> Json<Vec<SavedAsset>> {
    Json(state.workspace.lock().await.assets(query.kind))
}

/// POST /api/v1/assets
pub async fn handle_save_asset(
    State(state): State<AppState>,
    Json(request): Json<SaveAssetRequest>,
) -> Result<(StatusCode, Json<SavedAsset>), AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    let asset = SavedAsset::new(request.kind, request.title, request.content);
    let saved = state.workspace.lock().await.save_asset(asset);
    Ok((StatusCode::CREATED, Json(saved)))
}

/// DELETE /api/v1/assets/:id
pub async fn handle_delete_asset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    // A miss is not an error; the asset is gone either way.
    state.workspace.lock().await.delete_asset(id);
    StatusCode::NO_CONTENT
}
