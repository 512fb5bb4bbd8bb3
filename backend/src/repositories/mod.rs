//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod exercise;
pub mod goal;
pub mod nutrition;
pub mod progress;
pub mod user;
pub mod workout;

pub use exercise::{CreateExercise, ExerciseRecord, ExerciseRepository};
pub use goal::{CreateGoal, GoalRecord, GoalRepository};
pub use nutrition::{CreateNutrition, NutritionRecord, NutritionRepository};
pub use progress::{CreateProgress, ProgressRecord, ProgressRepository};
pub use user::{CreateUser, UserRecord, UserRepository};
pub use workout::{CreateWorkout, WorkoutRecord, WorkoutRepository};
