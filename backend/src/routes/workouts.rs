//! Workout API routes

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::repositories::{CreateWorkout, WorkoutRepository};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use fitlog_shared::types::{CreateWorkoutRequest, WorkoutResponse};

/// Create workout routes
pub fn workouts_routes() -> Router<AppState> {
    Router::new()
        .route("/workouts/", post(create_workout))
        .route("/workouts/:workout_id", get(get_workout))
}

/// POST /workouts/ - Record a workout session
async fn create_workout(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateWorkoutRequest>,
) -> Result<Json<WorkoutResponse>, ApiError> {
    let input = CreateWorkout {
        user_id: req.user_id,
        workout_date: req.workout_date,
        duration_minutes: req.duration_minutes,
        calories_burned: req.calories_burned,
        notes: req.notes,
    };

    let workout = WorkoutRepository::create(state.db(), input).await?;

    Ok(Json(WorkoutResponse {
        workout_id: workout.workout_id,
        user_id: workout.user_id,
        workout_date: workout.workout_date,
        duration_minutes: workout.duration_minutes,
        calories_burned: workout.calories_burned,
        notes: workout.notes,
    }))
}

/// GET /workouts/:workout_id - Fetch a workout by identifier
async fn get_workout(
    State(state): State<AppState>,
    Path(workout_id): Path<i64>,
) -> Result<Json<WorkoutResponse>, ApiError> {
    let workout = WorkoutRepository::find_by_id(state.db(), workout_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Workout not found".to_string()))?;

    Ok(Json(WorkoutResponse {
        workout_id: workout.workout_id,
        user_id: workout.user_id,
        workout_date: workout.workout_date,
        duration_minutes: workout.duration_minutes,
        calories_burned: workout.calories_burned,
        notes: workout.notes,
    }))
}
