//! Goal repository for database operations

use chrono::NaiveDate;
use sqlx::SqlitePool;

/// Goal record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GoalRecord {
    pub goal_id: i64,
    pub user_id: i64,
    pub goal_type: String,
    pub target_value: f64,
    pub current_value: f64,
    pub target_date: NaiveDate,
}

/// Input for creating a goal
#[derive(Debug, Clone)]
pub struct CreateGoal {
    pub user_id: i64,
    pub goal_type: String,
    pub target_value: f64,
    pub current_value: f64,
    pub target_date: NaiveDate,
}

/// Goal repository for database operations
pub struct GoalRepository;

impl GoalRepository {
    /// Insert a goal and return the stored row with its assigned identifier
    pub async fn create(pool: &SqlitePool, input: CreateGoal) -> Result<GoalRecord, sqlx::Error> {
        let goal = sqlx::query_as::<_, GoalRecord>(
            r#"
            INSERT INTO goals (user_id, goal_type, target_value, current_value, target_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING goal_id, user_id, goal_type, target_value, current_value, target_date
            "#,
        )
        .bind(input.user_id)
        .bind(&input.goal_type)
        .bind(input.target_value)
        .bind(input.current_value)
        .bind(input.target_date)
        .fetch_one(pool)
        .await?;

        Ok(goal)
    }

    /// Find goal by ID
    pub async fn find_by_id(
        pool: &SqlitePool,
        goal_id: i64,
    ) -> Result<Option<GoalRecord>, sqlx::Error> {
        let goal = sqlx::query_as::<_, GoalRecord>(
            r#"
            SELECT goal_id, user_id, goal_type, target_value, current_value, target_date
            FROM goals
            WHERE goal_id = $1
            "#,
        )
        .bind(goal_id)
        .fetch_optional(pool)
        .await?;

        Ok(goal)
    }
}
