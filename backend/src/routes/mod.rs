//! Route definitions for the fitlog API
//!
//! This module organizes all API routes and applies middleware.
//! Creation endpoints end with a trailing slash (`POST /users/`), fetch
//! endpoints take the identifier as the final path segment; both
//! spellings are part of the public contract.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod exercises;
mod goals;
mod health;
mod nutrition;
mod progress;
mod users;
mod workouts;


pub use exercises::exercises_routes;
pub use goals::goals_routes;
pub use nutrition::nutrition_routes;
pub use progress::progress_routes;
pub use users::users_routes;
pub use workouts::workouts_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .merge(users::users_routes())
        .merge(workouts::workouts_routes())
        .merge(exercises::exercises_routes())
        .merge(nutrition::nutrition_routes())
        .merge(goals::goals_routes())
        .merge(progress::progress_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
