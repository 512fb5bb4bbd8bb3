//! User repository for database operations

use chrono::NaiveDate;
use sqlx::SqlitePool;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
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

/// Input for creating a user
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub password_hash: Option<String>,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub height_cm: f64,
    pub weight_kg: f64,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Insert a user and return the stored row with its assigned identifier
    ///
    /// The email column carries a unique constraint; a duplicate email
    /// surfaces as a database error from the engine.
    pub async fn create(pool: &SqlitePool, input: CreateUser) -> Result<UserRecord, sqlx::Error> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (first_name, last_name, email, password_hash,
                               date_of_birth, gender, height_cm, weight_kg)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING user_id, first_name, last_name, email, password_hash,
                      date_of_birth, gender, height_cm, weight_kg
            "#,
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(input.date_of_birth)
        .bind(&input.gender)
        .bind(input.height_cm)
        .bind(input.weight_kg)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &SqlitePool, user_id: i64) -> Result<Option<UserRecord>, sqlx::Error> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT user_id, first_name, last_name, email, password_hash,
                   date_of_birth, gender, height_cm, weight_kg
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }
}
