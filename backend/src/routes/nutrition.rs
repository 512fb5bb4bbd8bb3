//! Nutrition API routes

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::repositories::{CreateNutrition, NutritionRepository};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use fitlog_shared::types::{CreateNutritionRequest, NutritionResponse};
use fitlog_shared::validation::validate_meal_type;

/// Create nutrition routes
pub fn nutrition_routes() -> Router<AppState> {
    Router::new()
        .route("/nutrition/", post(create_nutrition))
        .route("/nutrition/:nutrition_id", get(get_nutrition))
}

/// POST /nutrition/ - Log a meal
async fn create_nutrition(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateNutritionRequest>,
) -> Result<Json<NutritionResponse>, ApiError> {
    validate_meal_type(&req.meal_type).map_err(|msg| ApiError::invalid_field("MealType", msg))?;

    let input = CreateNutrition {
        user_id: req.user_id,
        log_date: req.log_date,
        meal_type: req.meal_type,
        food_item: req.food_item,
        calories: req.calories,
        protein_g: req.protein_g,
        carbs_g: req.carbs_g,
        fat_g: req.fat_g,
    };

    let entry = NutritionRepository::create(state.db(), input).await?;

    Ok(Json(NutritionResponse {
        nutrition_id: entry.nutrition_id,
        user_id: entry.user_id,
        log_date: entry.log_date,
        meal_type: entry.meal_type,
        food_item: entry.food_item,
        calories: entry.calories,
        protein_g: entry.protein_g,
        carbs_g: entry.carbs_g,
        fat_g: entry.fat_g,
    }))
}

/// GET /nutrition/:nutrition_id - Fetch a nutrition log entry by identifier
async fn get_nutrition(
    State(state): State<AppState>,
    Path(nutrition_id): Path<i64>,
) -> Result<Json<NutritionResponse>, ApiError> {
    let entry = NutritionRepository::find_by_id(state.db(), nutrition_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Nutrition log not found".to_string()))?;

    Ok(Json(NutritionResponse {
        nutrition_id: entry.nutrition_id,
        user_id: entry.user_id,
        log_date: entry.log_date,
        meal_type: entry.meal_type,
        food_item: entry.food_item,
        calories: entry.calories,
        protein_g: entry.protein_g,
        carbs_g: entry.carbs_g,
        fat_g: entry.fat_g,
    }))
}
