//! Goal API routes

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::repositories::{CreateGoal, GoalRepository};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use fitlog_shared::types::{CreateGoalRequest, GoalResponse};
use fitlog_shared::validation::validate_goal_type;

/// Create goal routes
pub fn goals_routes() -> Router<AppState> {
    Router::new()
        .route("/goals/", post(create_goal))
        .route("/goals/:goal_id", get(get_goal))
}

/// POST /goals/ - Set a fitness goal
async fn create_goal(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateGoalRequest>,
) -> Result<Json<GoalResponse>, ApiError> {
    validate_goal_type(&req.goal_type).map_err(|msg| ApiError::invalid_field("GoalType", msg))?;

    let input = CreateGoal {
        user_id: req.user_id,
        goal_type: req.goal_type,
        target_value: req.target_value,
        current_value: req.current_value,
        target_date: req.target_date,
    };

    let goal = GoalRepository::create(state.db(), input).await?;

    Ok(Json(GoalResponse {
        goal_id: goal.goal_id,
        user_id: goal.user_id,
        goal_type: goal.goal_type,
        target_value: goal.target_value,
        current_value: goal.current_value,
        target_date: goal.target_date,
    }))
}

/// GET /goals/:goal_id - Fetch a goal by identifier
async fn get_goal(
    State(state): State<AppState>,
    Path(goal_id): Path<i64>,
) -> Result<Json<GoalResponse>, ApiError> {
    let goal = GoalRepository::find_by_id(state.db(), goal_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Goal not found".to_string()))?;

    Ok(Json(GoalResponse {
        goal_id: goal.goal_id,
        user_id: goal.user_id,
        goal_type: goal.goal_type,
        target_value: goal.target_value,
        current_value: goal.current_value,
        target_date: goal.target_date,
    }))
}
