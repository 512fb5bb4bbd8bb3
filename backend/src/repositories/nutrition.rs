//! Nutrition repository - database operations for meal log entries

use chrono::NaiveDate;
use sqlx::SqlitePool;

/// Nutrition log entry from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NutritionRecord {
    pub nutrition_id: i64,
    pub user_id: i64,
    pub log_date: NaiveDate,
    pub meal_type: String,
    pub food_item: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Input for creating a nutrition log entry
#[derive(Debug, Clone)]
pub struct CreateNutrition {
    pub user_id: i64,
    pub log_date: NaiveDate,
    pub meal_type: String,
    pub food_item: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Nutrition repository for database operations
pub struct NutritionRepository;

impl NutritionRepository {
    /// Insert a nutrition log entry and return the stored row with its assigned identifier
    pub async fn create(
        pool: &SqlitePool,
        input: CreateNutrition,
    ) -> Result<NutritionRecord, sqlx::Error> {
        let entry = sqlx::query_as::<_, NutritionRecord>(
            r#"
            INSERT INTO nutrition (user_id, log_date, meal_type, food_item,
                                   calories, protein_g, carbs_g, fat_g)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING nutrition_id, user_id, log_date, meal_type, food_item,
                      calories, protein_g, carbs_g, fat_g
            "#,
        )
        .bind(input.user_id)
        .bind(input.log_date)
        .bind(&input.meal_type)
        .bind(&input.food_item)
        .bind(input.calories)
        .bind(input.protein_g)
        .bind(input.carbs_g)
        .bind(input.fat_g)
        .fetch_one(pool)
        .await?;

        Ok(entry)
    }

    /// Find nutrition log entry by ID
    pub async fn find_by_id(
        pool: &SqlitePool,
        nutrition_id: i64,
    ) -> Result<Option<NutritionRecord>, sqlx::Error> {
        let entry = sqlx::query_as::<_, NutritionRecord>(
            r#"
            SELECT nutrition_id, user_id, log_date, meal_type, food_item,
                   calories, protein_g, carbs_g, fat_g
            FROM nutrition
            WHERE nutrition_id = $1
            "#,
        )
        .bind(nutrition_id)
        .fetch_optional(pool)
        .await?;

        Ok(entry)
    }
}
