pub mod common;
pub mod project;
pub mod task;

pub use common::{parse_id, JsonBody, MessageResponse};
pub use project::{create_project, delete_project, get_project, list_projects, update_project};
pub use task::{
    create_task, delete_task, get_task, list_tasks, list_tasks_by_project, update_task,
};
