//! API request and response types
//!
//! Wire names are part of the public contract: five resources use
//! PascalCase keys with fully capitalized `ID` suffixes (`UserID`, not
//! `UserId`), while progress entries use snake_case keys. Existing
//! clients depend on the exact spellings, so the `rename` attributes
//! below pin them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payload for registering a user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserRequest {
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub password_hash: Option<String>,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub height_cm: f64,
    pub weight_kg: f64,
}

/// Stored user, identifier included
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserResponse {
    #[serde(rename = "UserID")]
    pub user_id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub password_hash: Option<String>,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub height_cm: f64,
    pub weight_kg: f64,
}

/// Payload for recording a workout session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateWorkoutRequest {
    #[serde(rename = "UserID")]
    pub user_id: i64,
    pub workout_date: NaiveDate,
    pub duration_minutes: i32,
    pub calories_burned: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Stored workout, identifier included
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WorkoutResponse {
    #[serde(rename = "WorkoutID")]
    pub workout_id: i64,
    #[serde(rename = "UserID")]
    pub user_id: i64,
    pub workout_date: NaiveDate,
    pub duration_minutes: i32,
    pub calories_burned: f64,
    pub notes: Option<String>,
}

/// Payload for adding an exercise to a workout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateExerciseRequest {
    #[serde(rename = "WorkoutID")]
    pub workout_id: i64,
    pub name: String,
    pub sets: i32,
    pub reps: i32,
    pub weight_kg: f64,
}

/// Stored exercise, identifier included
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExerciseResponse {
    #[serde(rename = "ExerciseID")]
    pub exercise_id: i64,
    #[serde(rename = "WorkoutID")]
    pub workout_id: i64,
    pub name: String,
    pub sets: i32,
    pub reps: i32,
    pub weight_kg: f64,
}

/// Payload for logging a meal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateNutritionRequest {
    #[serde(rename = "UserID")]
    pub user_id: i64,
    pub log_date: NaiveDate,
    pub meal_type: String,
    pub food_item: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Stored nutrition log entry, identifier included
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NutritionResponse {
    #[serde(rename = "NutritionID")]
    pub nutrition_id: i64,
    #[serde(rename = "UserID")]
    pub user_id: i64,
    pub log_date: NaiveDate,
    pub meal_type: String,
    pub food_item: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Payload for setting a fitness goal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGoalRequest {
    #[serde(rename = "UserID")]
    pub user_id: i64,
    pub goal_type: String,
    pub target_value: f64,
    pub current_value: f64,
    pub target_date: NaiveDate,
}

/// Stored goal, identifier included
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GoalResponse {
    #[serde(rename = "GoalID")]
    pub goal_id: i64,
    #[serde(rename = "UserID")]
    pub user_id: i64,
    pub goal_type: String,
    pub target_value: f64,
    pub current_value: f64,
    pub target_date: NaiveDate,
}

/// Payload for recording a progress measurement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProgressRequest {
    pub user_id: i64,
    pub log_date: NaiveDate,
    pub weight_kg: f64,
    pub body_fat_percentage: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Stored progress entry, identifier included
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub progress_id: i64,
    pub user_id: i64,
    pub log_date: NaiveDate,
    pub weight_kg: f64,
    pub body_fat_percentage: f64,
    pub notes: Option<String>,
}
