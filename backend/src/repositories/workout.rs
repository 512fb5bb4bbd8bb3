//! Workout repository for database operations

use chrono::NaiveDate;
use sqlx::SqlitePool;

/// Workout record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutRecord {
    pub workout_id: i64,
    pub user_id: i64,
    pub workout_date: NaiveDate,
    pub duration_minutes: i32,
    pub calories_burned: f64,
    pub notes: Option<String>,
}

/// Input for creating a workout
#[derive(Debug, Clone)]
pub struct CreateWorkout {
    pub user_id: i64,
    pub workout_date: NaiveDate,
    pub duration_minutes: i32,
    pub calories_burned: f64,
    pub notes: Option<String>,
}

/// Workout repository for database operations
pub struct WorkoutRepository;

impl WorkoutRepository {
    /// Insert a workout and return the stored row with its assigned identifier
    pub async fn create(
        pool: &SqlitePool,
        input: CreateWorkout,
    ) -> Result<WorkoutRecord, sqlx::Error> {
        let workout = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            INSERT INTO workouts (user_id, workout_date, duration_minutes, calories_burned, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING workout_id, user_id, workout_date, duration_minutes, calories_burned, notes
            "#,
        )
        .bind(input.user_id)
        .bind(input.workout_date)
        .bind(input.duration_minutes)
        .bind(input.calories_burned)
        .bind(&input.notes)
        .fetch_one(pool)
        .await?;

        Ok(workout)
    }

    /// Find workout by ID
    pub async fn find_by_id(
        pool: &SqlitePool,
        workout_id: i64,
    ) -> Result<Option<WorkoutRecord>, sqlx::Error> {
        let workout = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT workout_id, user_id, workout_date, duration_minutes, calories_burned, notes
            FROM workouts
            WHERE workout_id = $1
            "#,
        )
        .bind(workout_id)
        .fetch_optional(pool)
        .await?;

        Ok(workout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::repositories::user::{CreateUser, UserRepository};

    async fn seed_user(pool: &SqlitePool) -> i64 {
        let user = UserRepository::create(
            pool,
            CreateUser {
                first_name: "Ann".to_string(),
                last_name: None,
                email: "ann@x.com".to_string(),
                password_hash: None,
                date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
                gender: "Female".to_string(),
                height_cm: 170.0,
                weight_kg: 60.0,
            },
        )
        .await
        .unwrap();
        user.user_id
    }

    #[tokio::test]
    async fn test_create_and_fetch_workout() {
        let pool = test_pool().await;
        let user_id = seed_user(&pool).await;

        let created = WorkoutRepository::create(
            &pool,
            CreateWorkout {
                user_id,
                workout_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                duration_minutes: 30,
                calories_burned: 200.0,
                notes: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(created.workout_id, 1);
        assert_eq!(created.user_id, user_id);
        assert_eq!(created.notes, None);

        let found = WorkoutRepository::find_by_id(&pool, created.workout_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.duration_minutes, 30);
        assert_eq!(found.calories_burned, 200.0);
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_user() {
        let pool = test_pool().await;

        let result = WorkoutRepository::create(
            &pool,
            CreateWorkout {
                user_id: 999,
                workout_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                duration_minutes: 30,
                calories_burned: 200.0,
                notes: None,
            },
        )
        .await;

        assert!(matches!(result, Err(sqlx::Error::Database(_))));
    }

    #[tokio::test]
    async fn test_find_by_id_missing_row() {
        let pool = test_pool().await;
        let found = WorkoutRepository::find_by_id(&pool, 7).await.unwrap();
        assert!(found.is_none());
    }
}
