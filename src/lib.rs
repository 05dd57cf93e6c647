// Library crate for the projects & tasks service
// Exports modules for use by the server binary and tests

pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_project, create_task, delete_project, delete_task, get_project, get_task,
    list_projects, list_tasks, list_tasks_by_project, update_project, update_task,
};
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Hello World!" }))
        // Project routes
        .route("/project", get(list_projects).post(create_project))
        .route(
            "/project/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        // Task routes
        .route("/task", get(list_tasks).post(create_task))
        .route("/task/by-project/filter", get(list_tasks_by_project))
        .route(
            "/task/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
