use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::handlers::{parse_id, JsonBody, MessageResponse};
use crate::models::{ProjectTasksParams, Task, TaskListParams, TaskPayload};
use crate::state::AppState;

const NOT_FOUND: &str = "Task not found";

/// List tasks, optionally filtered by status, priority and due date
#[utoipa::path(
    get,
    path = "/task",
    params(TaskListParams),
    responses(
        (status = 200, description = "Tasks matching every given filter", body = Vec<Task>),
        (status = 400, description = "Unparseable dueDate", body = MessageResponse),
        (status = 500, description = "Error fetching tasks", body = MessageResponse)
    ),
    tag = "Tasks"
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<TaskListParams>,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = state.tasks.list_tasks(params).await?;
    Ok(Json(tasks))
}

/// List the tasks of one project
#[utoipa::path(
    get,
    path = "/task/by-project/filter",
    params(ProjectTasksParams),
    responses(
        (status = 200, description = "Tasks of the project", body = Vec<Task>),
        (status = 400, description = "Project ID is required", body = MessageResponse),
        (status = 500, description = "Error fetching tasks", body = MessageResponse)
    ),
    tag = "Tasks"
)]
pub async fn list_tasks_by_project(
    State(state): State<AppState>,
    Query(params): Query<ProjectTasksParams>,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = state.tasks.list_tasks_by_project(params).await?;
    Ok(Json(tasks))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/task/{id}",
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task details", body = Task),
        (status = 404, description = "Task not found", body = MessageResponse),
        (status = 500, description = "Error fetching task", body = MessageResponse)
    ),
    tag = "Tasks"
)]
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Task>> {
    let task = state.tasks.get_task(parse_id(&id, NOT_FOUND)?).await?;
    Ok(Json(task))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "/task",
    request_body = TaskPayload,
    responses(
        (status = 201, description = "Task created successfully", body = MessageResponse),
        (status = 400, description = "Validation error", body = MessageResponse),
        (status = 500, description = "Error creating task", body = MessageResponse)
    ),
    tag = "Tasks"
)]
pub async fn create_task(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<TaskPayload>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.tasks.create_task(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Task created successfully")),
    ))
}

/// Replace a task
#[utoipa::path(
    put,
    path = "/task/{id}",
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    request_body = TaskPayload,
    responses(
        (status = 200, description = "Task updated successfully", body = MessageResponse),
        (status = 400, description = "Validation error", body = MessageResponse),
        (status = 404, description = "Task not found", body = MessageResponse),
        (status = 500, description = "Error updating task", body = MessageResponse)
    ),
    tag = "Tasks"
)]
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<TaskPayload>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id, NOT_FOUND)?;
    state.tasks.update_task(id, payload).await?;
    Ok(Json(MessageResponse::new("Task updated successfully")))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/task/{id}",
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task deleted successfully", body = MessageResponse),
        (status = 404, description = "Task not found", body = MessageResponse),
        (status = 500, description = "Error deleting task", body = MessageResponse)
    ),
    tag = "Tasks"
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.tasks.delete_task(parse_id(&id, NOT_FOUND)?).await?;
    Ok(Json(MessageResponse::new("Task deleted successfully")))
}
