use std::sync::Arc;

use time::Date;

use crate::error::{AppError, AppResult};
use crate::models::{
    ProjectTasksParams, Task, TaskFields, TaskFilter, TaskListParams, TaskPayload,
};
use crate::repositories::TaskRepository;
use crate::services::clock::Clock;
use crate::services::validation::{
    parse_calendar_date, validate_as_of, Check, Constraint, FieldValue, Fields,
};

pub const DEFAULT_STATUS: &str = "To Do";
pub const DEFAULT_PRIORITY: &str = "Medium";

const NOT_FOUND: &str = "Task not found";
const DUE_DATE_RULE: &str = "Valid due date is required";
const UPDATE_TITLE_RULE: &str = "Task title is required and must be <= 255 characters";
const PROJECT_ID_RULE: &str = "Project ID is required";

const CREATE_RULES: &[Constraint] = &[
    Constraint::new("title", Check::NotBlank, "Task title is required"),
    Constraint::new("project_id", Check::Required, PROJECT_ID_RULE),
    Constraint::new(
        "title",
        Check::MaxLength(255),
        "Title must be 255 characters or less",
    ),
    Constraint::new(
        "description",
        Check::MaxLength(1000),
        "Description must be 1000 characters or less",
    ),
    Constraint::new("due_date", Check::Date, DUE_DATE_RULE),
    Constraint::new("due_date", Check::NotPast, "Due date cannot be in the past"),
];

// Update deliberately checks less than create: no blank-title, project_id,
// description-length or past-date rules.
const UPDATE_RULES: &[Constraint] = &[
    Constraint::new("title", Check::Required, UPDATE_TITLE_RULE),
    Constraint::new("title", Check::MaxLength(255), UPDATE_TITLE_RULE),
    Constraint::new("due_date", Check::Date, DUE_DATE_RULE),
];

impl Fields for TaskPayload {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "title" => self.title.as_deref().into(),
            "description" => self.description.as_deref().into(),
            "status" => self.status.as_deref().into(),
            "priority" => self.priority.as_deref().into(),
            "project_id" => self.project_id.into(),
            "due_date" => self.due_date.as_deref().into(),
            _ => FieldValue::Absent,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl TaskFields {
    /// Apply the defaults shared by create and update to a validated payload
    pub fn with_defaults(payload: TaskPayload, due_date: Date) -> Self {
        Self {
            title: payload.title.unwrap_or_default(),
            description: non_empty(payload.description),
            status: non_empty(payload.status).unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            priority: non_empty(payload.priority).unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
            project_id: payload.project_id,
            due_date,
        }
    }
}

/// Parse the validated due date out of a payload
fn due_date_of(payload: &TaskPayload) -> AppResult<Date> {
    payload
        .due_date
        .as_deref()
        .and_then(parse_calendar_date)
        .ok_or_else(|| AppError::Validation(DUE_DATE_RULE.to_string()))
}

/// Service layer for task validation and persistence
#[derive(Clone)]
pub struct TaskService {
    repository: Arc<dyn TaskRepository>,
    clock: Arc<dyn Clock>,
}

impl TaskService {
    pub fn new(repository: Arc<dyn TaskRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// List tasks matching every provided filter
    pub async fn list_tasks(&self, params: TaskListParams) -> AppResult<Vec<Task>> {
        let due_date = match non_empty(params.due_date) {
            Some(raw) => Some(
                parse_calendar_date(&raw)
                    .ok_or_else(|| AppError::Validation(DUE_DATE_RULE.to_string()))?,
            ),
            None => None,
        };
        let filter = TaskFilter {
            status: non_empty(params.status),
            priority: non_empty(params.priority),
            due_date,
        };

        self.repository
            .list(&filter)
            .await
            .map_err(AppError::store("Error fetching tasks"))
    }

    pub async fn list_tasks_by_project(&self, params: ProjectTasksParams) -> AppResult<Vec<Task>> {
        let project_id = params
            .project_id
            .as_deref()
            .map(str::trim)
            .and_then(|raw| raw.parse::<i32>().ok())
            .ok_or_else(|| AppError::Validation(PROJECT_ID_RULE.to_string()))?;

        self.repository
            .list_by_project(project_id)
            .await
            .map_err(AppError::store("Error fetching tasks"))
    }

    pub async fn get_task(&self, id: i32) -> AppResult<Task> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(AppError::store("Error fetching task"))?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    /// Validate and insert a task, returning the store-assigned id
    pub async fn create_task(&self, payload: TaskPayload) -> AppResult<i32> {
        validate_as_of(&payload, CREATE_RULES, self.clock.today())?;
        let due_date = due_date_of(&payload)?;

        let id = self
            .repository
            .insert(&TaskFields::with_defaults(payload, due_date))
            .await
            .map_err(AppError::store("Error creating task"))?;

        tracing::info!(task_id = id, "Created task");
        Ok(id)
    }

    pub async fn update_task(&self, id: i32, payload: TaskPayload) -> AppResult<()> {
        validate_as_of(&payload, UPDATE_RULES, self.clock.today())?;
        let due_date = due_date_of(&payload)?;

        let affected = self
            .repository
            .update(id, &TaskFields::with_defaults(payload, due_date))
            .await
            .map_err(AppError::store("Error updating task"))?;

        if affected == 0 {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        tracing::info!(task_id = id, "Updated task");
        Ok(())
    }

    pub async fn delete_task(&self, id: i32) -> AppResult<()> {
        let affected = self
            .repository
            .delete(id)
            .await
            .map_err(AppError::store("Error deleting task"))?;

        if affected == 0 {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        tracing::info!(task_id = id, "Deleted task");
        Ok(())
    }
}
