//! Exercise repository for database operations

use sqlx::SqlitePool;

/// Exercise record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExerciseRecord {
    pub exercise_id: i64,
    pub workout_id: i64,
    pub name: String,
    pub sets: i32,
    pub reps: i32,
    pub weight_kg: f64,
}

/// Input for creating an exercise
#[derive(Debug, Clone)]
pub struct CreateExercise {
    pub workout_id: i64,
    pub name: String,
    pub sets: i32,
    pub reps: i32,
    pub weight_kg: f64,
}

/// Exercise repository for database operations
pub struct ExerciseRepository;

impl ExerciseRepository {
    /// Insert an exercise and return the stored row with its assigned identifier
    pub async fn create(
        pool: &SqlitePool,
        input: CreateExercise,
    ) -> Result<ExerciseRecord, sqlx::Error> {
        let exercise = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            INSERT INTO exercises (workout_id, name, sets, reps, weight_kg)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING exercise_id, workout_id, name, sets, reps, weight_kg
            "#,
        )
        .bind(input.workout_id)
        .bind(&input.name)
        .bind(input.sets)
        .bind(input.reps)
        .bind(input.weight_kg)
        .fetch_one(pool)
        .await?;

        Ok(exercise)
    }

    /// Find exercise by ID
    pub async fn find_by_id(
        pool: &SqlitePool,
        exercise_id: i64,
    ) -> Result<Option<ExerciseRecord>, sqlx::Error> {
        let exercise = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            SELECT exercise_id, workout_id, name, sets, reps, weight_kg
            FROM exercises
            WHERE exercise_id = $1
            "#,
        )
        .bind(exercise_id)
        .fetch_optional(pool)
        .await?;

        Ok(exercise)
    }
}
