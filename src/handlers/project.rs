use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::handlers::{parse_id, JsonBody, MessageResponse};
use crate::models::{Project, ProjectPayload};
use crate::state::AppState;

const NOT_FOUND: &str = "Project not found";

/// List all projects
#[utoipa::path(
    get,
    path = "/project",
    responses(
        (status = 200, description = "List of projects", body = Vec<Project>),
        (status = 500, description = "Error fetching projects", body = MessageResponse)
    ),
    tag = "Projects"
)]
pub async fn list_projects(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.projects.list_projects().await?;
    Ok(Json(projects))
}

/// Get a project by ID
#[utoipa::path(
    get,
    path = "/project/{id}",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project details", body = Project),
        (status = 404, description = "Project not found", body = MessageResponse),
        (status = 500, description = "Error fetching project", body = MessageResponse)
    ),
    tag = "Projects"
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    let project = state.projects.get_project(parse_id(&id, NOT_FOUND)?).await?;
    Ok(Json(project))
}

/// Create a new project
#[utoipa::path(
    post,
    path = "/project",
    request_body = ProjectPayload,
    responses(
        (status = 201, description = "Project created successfully", body = MessageResponse),
        (status = 400, description = "Validation error", body = MessageResponse),
        (status = 500, description = "Error creating project", body = MessageResponse)
    ),
    tag = "Projects"
)]
pub async fn create_project(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ProjectPayload>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.projects.create_project(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Project created successfully")),
    ))
}

/// Replace a project
#[utoipa::path(
    put,
    path = "/project/{id}",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    request_body = ProjectPayload,
    responses(
        (status = 200, description = "Project updated successfully", body = MessageResponse),
        (status = 400, description = "Validation error", body = MessageResponse),
        (status = 404, description = "Project not found", body = MessageResponse),
        (status = 500, description = "Error updating project", body = MessageResponse)
    ),
    tag = "Projects"
)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<ProjectPayload>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id, NOT_FOUND)?;
    state.projects.update_project(id, payload).await?;
    Ok(Json(MessageResponse::new("Project updated successfully")))
}

/// Delete a project
#[utoipa::path(
    delete,
    path = "/project/{id}",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project deleted successfully", body = MessageResponse),
        (status = 404, description = "Project not found", body = MessageResponse),
        (status = 500, description = "Error deleting project", body = MessageResponse)
    ),
    tag = "Projects"
)]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.projects.delete_project(parse_id(&id, NOT_FOUND)?).await?;
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}
