use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::models::{Project, ProjectFields, Task, TaskFields, TaskFilter};
use crate::repositories::{ProjectRepository, TaskRepository};

/// In-memory store implementing both repositories (for development/testing)
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<InMemoryStoreInner>>,
}

#[derive(Default)]
struct InMemoryStoreInner {
    projects: BTreeMap<i32, Project>,
    tasks: BTreeMap<i32, Task>,
    last_project_id: i32,
    last_task_id: i32,
    unavailable: bool,
}

impl InMemoryStoreInner {
    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable {
            return Err(StoreError::Unavailable("in-memory store offline".to_string()));
        }
        Ok(())
    }
}

fn require_project_id(fields: &TaskFields) -> StoreResult<i32> {
    fields
        .project_id
        .ok_or_else(|| StoreError::Constraint("task.project_id cannot be null".to_string()))
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the database were unreachable
    pub async fn set_unavailable(&self, unavailable: bool) {
        self.inner.write().await.unavailable = unavailable;
    }
}

#[async_trait]
impl ProjectRepository for InMemoryStore {
    async fn list(&self) -> StoreResult<Vec<Project>> {
        let inner = self.inner.read().await;
        inner.check_available()?;
        Ok(inner.projects.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Project>> {
        let inner = self.inner.read().await;
        inner.check_available()?;
        Ok(inner.projects.get(&id).cloned())
    }

    async fn insert(&self, fields: &ProjectFields) -> StoreResult<i32> {
        let mut inner = self.inner.write().await;
        inner.check_available()?;

        inner.last_project_id += 1;
        let id = inner.last_project_id;
        inner.projects.insert(
            id,
            Project {
                id,
                name: fields.name.clone(),
                description: fields.description.clone(),
            },
        );

        Ok(id)
    }

    async fn update(&self, id: i32, fields: &ProjectFields) -> StoreResult<u64> {
        let mut inner = self.inner.write().await;
        inner.check_available()?;

        match inner.projects.get_mut(&id) {
            Some(project) => {
                project.name = fields.name.clone();
                project.description = fields.description.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> StoreResult<u64> {
        let mut inner = self.inner.write().await;
        inner.check_available()?;
        Ok(u64::from(inner.projects.remove(&id).is_some()))
    }
}

#[async_trait]
impl TaskRepository for InMemoryStore {
    async fn list(&self, filter: &TaskFilter) -> StoreResult<Vec<Task>> {
        let inner = self.inner.read().await;
        inner.check_available()?;
        Ok(inner
            .tasks
            .values()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect())
    }

    async fn list_by_project(&self, project_id: i32) -> StoreResult<Vec<Task>> {
        let inner = self.inner.read().await;
        inner.check_available()?;
        Ok(inner
            .tasks
            .values()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Task>> {
        let inner = self.inner.read().await;
        inner.check_available()?;
        Ok(inner.tasks.get(&id).cloned())
    }

    async fn insert(&self, fields: &TaskFields) -> StoreResult<i32> {
        let mut inner = self.inner.write().await;
        inner.check_available()?;
        let project_id = require_project_id(fields)?;

        inner.last_task_id += 1;
        let id = inner.last_task_id;
        inner.tasks.insert(
            id,
            Task {
                id,
                title: fields.title.clone(),
                description: fields.description.clone(),
                status: fields.status.clone(),
                priority: fields.priority.clone(),
                project_id,
                due_date: fields.due_date,
            },
        );

        Ok(id)
    }

    async fn update(&self, id: i32, fields: &TaskFields) -> StoreResult<u64> {
        let mut inner = self.inner.write().await;
        inner.check_available()?;

        let Some(task) = inner.tasks.get_mut(&id) else {
            return Ok(0);
        };
        let project_id = require_project_id(fields)?;

        task.title = fields.title.clone();
        task.description = fields.description.clone();
        task.status = fields.status.clone();
        task.priority = fields.priority.clone();
        task.project_id = project_id;
        task.due_date = fields.due_date;
        Ok(1)
    }

    async fn delete(&self, id: i32) -> StoreResult<u64> {
        let mut inner = self.inner.write().await;
        inner.check_available()?;
        Ok(u64::from(inner.tasks.remove(&id).is_some()))
    }
}
