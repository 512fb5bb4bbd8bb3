//! Exercise API routes

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::repositories::{CreateExercise, ExerciseRepository};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use fitlog_shared::types::{CreateExerciseRequest, ExerciseResponse};

/// Create exercise routes
pub fn exercises_routes() -> Router<AppState> {
    Router::new()
        .route("/exercises/", post(create_exercise))
        .route("/exercises/:exercise_id", get(get_exercise))
}

/// POST /exercises/ - Add an exercise to a workout
async fn create_exercise(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateExerciseRequest>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    let input = CreateExercise {
        workout_id: req.workout_id,
        name: req.name,
        sets: req.sets,
        reps: req.reps,
        weight_kg: req.weight_kg,
    };

    let exercise = ExerciseRepository::create(state.db(), input).await?;

    Ok(Json(ExerciseResponse {
        exercise_id: exercise.exercise_id,
        workout_id: exercise.workout_id,
        name: exercise.name,
        sets: exercise.sets,
        reps: exercise.reps,
        weight_kg: exercise.weight_kg,
    }))
}

/// GET /exercises/:exercise_id - Fetch an exercise by identifier
async fn get_exercise(
    State(state): State<AppState>,
    Path(exercise_id): Path<i64>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    let exercise = ExerciseRepository::find_by_id(state.db(), exercise_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Exercise not found".to_string()))?;

    Ok(Json(ExerciseResponse {
        exercise_id: exercise.exercise_id,
        workout_id: exercise.workout_id,
        name: exercise.name,
        sets: exercise.sets,
        reps: exercise.reps,
        weight_kg: exercise.weight_kg,
    }))
}
