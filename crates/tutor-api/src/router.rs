//! Route definitions for the tutoring HTTP API.
//!
//! Every entity resource is mounted under `/api`; the health check sits at
//! the root.

use axum::Router;
use axum::routing::get;

use crate::handlers;
use crate::handlers::resource::{
    Answers, LessonTimes, Lessons, Likes, Questions, Ratings, Rooms, Schedules, Students,
    Teachers, routes,
};
use crate::state::AppState;

/// Build the Axum router with all routes, threading `state` through every
/// handler.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(routes::<Students>())
        .merge(routes::<Teachers>())
        .merge(routes::<Rooms>())
        .merge(routes::<LessonTimes>())
        .merge(routes::<Lessons>())
        .merge(routes::<Schedules>())
        .merge(routes::<Ratings>())
        .merge(routes::<Questions>())
        .merge(routes::<Answers>())
        .merge(routes::<Likes>())
        .merge(extra_routes());

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health::health))
        .with_state(state)
}

/// Lookups and association maintenance outside the generic CRUD set.
fn extra_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/teachers/by-code/{code}",
            get(handlers::teacher::find_by_code),
        )
        .route(
            "/ratings/{id}/questions",
            get(handlers::rating::list_questions).put(handlers::rating::replace_questions),
        )
}
