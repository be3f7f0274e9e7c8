use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers::{exercises, health, users};

pub fn create_router(
    users_state: users::UsersState,
    exercises_state: exercises::ExercisesState,
    public_dir: &Path,
) -> Router {
    Router::new()
        // User routes
        .route("/api/users", get(users::list).post(users::create))
        .with_state(users_state)
        // Exercise routes
        .route("/api/users/{id}/exercises", post(exercises::create))
        .route("/api/users/{id}/logs", get(exercises::log))
        .with_state(exercises_state)
        // Health check
        .route("/health", get(health::health_check))
        // Front page and assets
        .fallback_service(ServeDir::new(public_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
