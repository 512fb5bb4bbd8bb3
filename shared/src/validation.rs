//! Input validation functions
//!
//! The API accepts several free-form string fields whose values must come
//! from a closed set. Validation compares against the canonical lists below;
//! matching is exact, so casing matters ("male" is not a valid gender).

/// Valid gender values
pub const VALID_GENDERS: &[&str] = &["Male", "Female", "Other"];

/// Valid goal type values
pub const VALID_GOAL_TYPES: &[&str] = &["Weight Loss", "Muscle Gain", "Endurance", "Flexibility"];

/// Valid meal type values
pub const VALID_MEAL_TYPES: &[&str] = &["Breakfast", "Lunch", "Dinner", "Snack"];

fn validate_one_of(value: &str, allowed: &[&str], label: &str) -> Result<(), String> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(format!(
            "Invalid {label}. Must be one of: {}",
            allowed.join(", ")
        ))
    }
}

/// Validate a gender value
pub fn validate_gender(gender: &str) -> Result<(), String> {
    validate_one_of(gender, VALID_GENDERS, "gender")
}

/// Validate a goal type value
pub fn validate_goal_type(goal_type: &str) -> Result<(), String> {
    validate_one_of(goal_type, VALID_GOAL_TYPES, "goal type")
}

/// Validate a meal type value
pub fn validate_meal_type(meal_type: &str) -> Result<(), String> {
    validate_one_of(meal_type, VALID_MEAL_TYPES, "meal type")
}
