use serde::{Deserialize, Serialize};
use time::Date;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub project_id: i32,
    #[schema(value_type = String, example = "2026-12-31")]
    pub due_date: Date,
}

/// Request body for creating or replacing a task
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TaskPayload {
    #[schema(max_length = 255)]
    pub title: Option<String>,
    #[schema(max_length = 1000)]
    pub description: Option<String>,
    #[schema(example = "To Do")]
    pub status: Option<String>,
    #[schema(example = "Medium")]
    pub priority: Option<String>,
    pub project_id: Option<i32>,
    #[schema(example = "2026-12-31")]
    pub due_date: Option<String>,
}

/// Writable columns of a task row after defaults have been applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    /// `None` only reaches the store on update, where the column's NOT NULL rejects it
    pub project_id: Option<i32>,
    pub due_date: Date,
}

/// Query string accepted by `GET /task`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TaskListParams {
    pub status: Option<String>,
    pub priority: Option<String>,
    /// Calendar date; any time component is ignored
    #[serde(rename = "dueDate")]
    #[param(example = "2026-12-31")]
    pub due_date: Option<String>,
}

/// Query string accepted by `GET /task/by-project/filter`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectTasksParams {
    #[serde(rename = "projectId")]
    pub project_id: Option<String>,
}

/// Conjunctive equality filter; `None` means the column is not constrained
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<Date>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        self.status.as_ref().is_none_or(|s| *s == task.status)
            && self.priority.as_ref().is_none_or(|p| *p == task.priority)
            && self.due_date.is_none_or(|d| d == task.due_date)
    }
}
