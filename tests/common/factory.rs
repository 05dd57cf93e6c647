use taskboard::models::{Project, ProjectPayload, Task, TaskPayload};
use taskboard::state::AppState;

/// Factory for creating test data
pub struct Factory<'a> {
    state: &'a AppState,
}

#[allow(dead_code)]
impl<'a> Factory<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Create a test project
    pub async fn create_project(&self, name: &str) -> Project {
        let id = self
            .state
            .projects
            .create_project(ProjectPayload {
                name: Some(name.to_string()),
                description: Some("Test project description".to_string()),
            })
            .await
            .unwrap();

        self.state.projects.get_project(id).await.unwrap()
    }

    /// Create a test task with explicit status and priority
    pub async fn create_task(
        &self,
        project_id: i32,
        status: &str,
        priority: &str,
        due_date: &str,
    ) -> Task {
        let id = self
            .state
            .tasks
            .create_task(TaskPayload {
                title: Some(format!("{status} / {priority}")),
                description: None,
                status: Some(status.to_string()),
                priority: Some(priority.to_string()),
                project_id: Some(project_id),
                due_date: Some(due_date.to_string()),
            })
            .await
            .unwrap();

        self.state.tasks.get_task(id).await.unwrap()
    }
}
