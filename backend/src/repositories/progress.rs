//! Progress repository for database operations

use chrono::NaiveDate;
use sqlx::SqlitePool;

/// Progress record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProgressRecord {
    pub progress_id: i64,
    pub user_id: i64,
    pub log_date: NaiveDate,
    pub weight_kg: f64,
    pub body_fat_percentage: f64,
    pub notes: Option<String>,
}

/// Input for creating a progress entry
#[derive(Debug, Clone)]
pub struct CreateProgress {
    pub user_id: i64,
    pub log_date: NaiveDate,
    pub weight_kg: f64,
    pub body_fat_percentage: f64,
    pub notes: Option<String>,
}

/// Progress repository for database operations
pub struct ProgressRepository;

impl ProgressRepository {
    /// Insert a progress entry and return the stored row with its assigned identifier
    pub async fn create(
        pool: &SqlitePool,
        input: CreateProgress,
    ) -> Result<ProgressRecord, sqlx::Error> {
        let entry = sqlx::query_as::<_, ProgressRecord>(
            r#"
            INSERT INTO progress (user_id, log_date, weight_kg, body_fat_percentage, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING progress_id, user_id, log_date, weight_kg, body_fat_percentage, notes
            "#,
        )
        .bind(input.user_id)
        .bind(input.log_date)
        .bind(input.weight_kg)
        .bind(input.body_fat_percentage)
        .bind(&input.notes)
        .fetch_one(pool)
        .await?;

        Ok(entry)
    }

    /// Find progress entry by ID
    pub async fn find_by_id(
        pool: &SqlitePool,
        progress_id: i64,
    ) -> Result<Option<ProgressRecord>, sqlx::Error> {
        let entry = sqlx::query_as::<_, ProgressRecord>(
            r#"
            SELECT progress_id, user_id, log_date, weight_kg, body_fat_percentage, notes
            FROM progress
            WHERE progress_id = $1
            "#,
        )
        .bind(progress_id)
        .fetch_optional(pool)
        .await?;

        Ok(entry)
    }

    /// List all progress entries recorded for a user, oldest first
    ///
    /// Unlike the other resources, progress is read back per owning
    /// user. A user with no entries yields an empty list, not an error.
    pub async fn list_by_user(
        pool: &SqlitePool,
        user_id: i64,
    ) -> Result<Vec<ProgressRecord>, sqlx::Error> {
        let entries = sqlx::query_as::<_, ProgressRecord>(
            r#"
            SELECT progress_id, user_id, log_date, weight_kg, body_fat_percentage, notes
            FROM progress
            WHERE user_id = $1
            ORDER BY progress_id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::repositories::user::{CreateUser, UserRepository};

    async fn seed_user(pool: &SqlitePool, email: &str) -> i64 {
        let user = UserRepository::create(
            pool,
            CreateUser {
                first_name: "Ann".to_string(),
                last_name: None,
                email: email.to_string(),
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

    fn entry_for(user_id: i64, day: u32, weight_kg: f64) -> CreateProgress {
        CreateProgress {
            user_id,
            log_date: NaiveDate::from_ymd_opt(2024, 2, day).unwrap(),
            weight_kg,
            body_fat_percentage: 18.0,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_fetch_progress_entry() {
        let pool = test_pool().await;
        let user_id = seed_user(&pool, "ann@x.com").await;

        let created = ProgressRepository::create(
            &pool,
            CreateProgress {
                notes: Some("feeling good".to_string()),
                ..entry_for(user_id, 1, 68.5)
            },
        )
        .await
        .unwrap();

        let found = ProgressRepository::find_by_id(&pool, created.progress_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.weight_kg, 68.5);
        assert_eq!(found.notes.as_deref(), Some("feeling good"));
    }

    #[tokio::test]
    async fn test_list_by_user_returns_only_their_entries() {
        let pool = test_pool().await;
        let ann = seed_user(&pool, "ann@x.com").await;
        let bob = seed_user(&pool, "bob@x.com").await;

        ProgressRepository::create(&pool, entry_for(ann, 1, 68.5))
            .await
            .unwrap();
        ProgressRepository::create(&pool, entry_for(ann, 8, 68.0))
            .await
            .unwrap();
        ProgressRepository::create(&pool, entry_for(bob, 1, 82.0))
            .await
            .unwrap();

        let entries = ProgressRepository::list_by_user(&pool, ann).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.user_id == ann));
        assert_eq!(entries[0].weight_kg, 68.5);
        assert_eq!(entries[1].weight_kg, 68.0);
    }

    #[tokio::test]
    async fn test_list_by_user_empty_without_entries() {
        let pool = test_pool().await;
        let user_id = seed_user(&pool, "ann@x.com").await;

        let entries = ProgressRepository::list_by_user(&pool, user_id)
            .await
            .unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id_missing_row() {
        let pool = test_pool().await;
        let found = ProgressRepository::find_by_id(&pool, 1).await.unwrap();
        assert!(found.is_none());
    }
}
