//! User API routes

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::repositories::{CreateUser, UserRepository};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use fitlog_shared::types::{CreateUserRequest, UserResponse};
use fitlog_shared::validation::validate_gender;

/// Create user routes
pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", post(create_user))
        .route("/users/:user_id", get(get_user))
}

/// POST /users/ - Register a user
async fn create_user(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    validate_gender(&req.gender).map_err(|msg| ApiError::invalid_field("Gender", msg))?;

    let input = CreateUser {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        password_hash: req.password_hash,
        date_of_birth: req.date_of_birth,
        gender: req.gender,
        height_cm: req.height_cm,
        weight_kg: req.weight_kg,
    };

    let user = UserRepository::create(state.db(), input).await?;

    Ok(Json(UserResponse {
        user_id: user.user_id,
        first_name: user.first_name,
        last_name: user.last_name,
        email: user.email,
        password_hash: user.password_hash,
        date_of_birth: user.date_of_birth,
        gender: user.gender,
        height_cm: user.height_cm,
        weight_kg: user.weight_kg,
    }))
}

/// GET /users/:user_id - Fetch a user by identifier
async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserRepository::find_by_id(state.db(), user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse {
        user_id: user.user_id,
        first_name: user.first_name,
        last_name: user.last_name,
        email: user.email,
        password_hash: user.password_hash,
        date_of_birth: user.date_of_birth,
        gender: user.gender,
        height_cm: user.height_cm,
        weight_kg: user.weight_kg,
    }))
}
