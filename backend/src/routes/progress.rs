//! Progress API routes
//!
//! Progress reads differ from the other resources: the collection
//! endpoint takes the owning user's identifier and returns every entry
//! recorded for that user, while single entries live under
//! `/progress/entry/:progress_id`.

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::repositories::{CreateProgress, ProgressRepository};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use fitlog_shared::types::{CreateProgressRequest, ProgressResponse};

/// Create progress routes
pub fn progress_routes() -> Router<AppState> {
    Router::new()
        .route("/progress/", post(create_progress))
        .route("/progress/:user_id", get(list_progress))
        .route("/progress/entry/:progress_id", get(get_progress_entry))
}

/// POST /progress/ - Record a progress measurement
async fn create_progress(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateProgressRequest>,
) -> Result<Json<ProgressResponse>, ApiError> {
    let input = CreateProgress {
        user_id: req.user_id,
        log_date: req.log_date,
        weight_kg: req.weight_kg,
        body_fat_percentage: req.body_fat_percentage,
        notes: req.notes,
    };

    let entry = ProgressRepository::create(state.db(), input).await?;

    Ok(Json(ProgressResponse {
        progress_id: entry.progress_id,
        user_id: entry.user_id,
        log_date: entry.log_date,
        weight_kg: entry.weight_kg,
        body_fat_percentage: entry.body_fat_percentage,
        notes: entry.notes,
    }))
}

/// GET /progress/:user_id - List all progress entries for a user
async fn list_progress(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<ProgressResponse>>, ApiError> {
    let entries = ProgressRepository::list_by_user(state.db(), user_id).await?;

    Ok(Json(
        entries
            .into_iter()
            .map(|e| ProgressResponse {
                progress_id: e.progress_id,
                user_id: e.user_id,
                log_date: e.log_date,
                weight_kg: e.weight_kg,
                body_fat_percentage: e.body_fat_percentage,
                notes: e.notes,
            })
            .collect(),
    ))
}

/// GET /progress/entry/:progress_id - Fetch a progress entry by identifier
async fn get_progress_entry(
    State(state): State<AppState>,
    Path(progress_id): Path<i64>,
) -> Result<Json<ProgressResponse>, ApiError> {
    let entry = ProgressRepository::find_by_id(state.db(), progress_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Progress entry not found".to_string()))?;

    Ok(Json(ProgressResponse {
        progress_id: entry.progress_id,
        user_id: entry.user_id,
        log_date: entry.log_date,
        weight_kg: entry.weight_kg,
        body_fat_percentage: entry.body_fat_percentage,
        notes: entry.notes,
    }))
}
