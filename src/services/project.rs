use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{Project, ProjectFields, ProjectPayload};
use crate::repositories::ProjectRepository;
use crate::services::validation::{validate, Check, Constraint, FieldValue, Fields};

const NAME_RULE: &str = "Project name is required and must be <= 255 characters";
const NOT_FOUND: &str = "Project not found";

/// Rules shared by create and update; a project is always written in full
const PROJECT_RULES: &[Constraint] = &[
    Constraint::new("name", Check::Required, NAME_RULE),
    Constraint::new("name", Check::MaxLength(255), NAME_RULE),
];

impl Fields for ProjectPayload {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "name" => self.name.as_deref().into(),
            "description" => self.description.as_deref().into(),
            _ => FieldValue::Absent,
        }
    }
}

impl ProjectFields {
    /// Writable columns from an already validated payload
    fn from_payload(payload: ProjectPayload) -> Self {
        Self {
            name: payload.name.unwrap_or_default(),
            description: payload.description.filter(|d| !d.is_empty()),
        }
    }
}

/// Service layer for project validation and persistence
#[derive(Clone)]
pub struct ProjectService {
    repository: Arc<dyn ProjectRepository>,
}

impl ProjectService {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_projects(&self) -> AppResult<Vec<Project>> {
        self.repository
            .list()
            .await
            .map_err(AppError::store("Error fetching projects"))
    }

    pub async fn get_project(&self, id: i32) -> AppResult<Project> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(AppError::store("Error fetching project"))?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    /// Validate and insert a project, returning the store-assigned id
    pub async fn create_project(&self, payload: ProjectPayload) -> AppResult<i32> {
        validate(&payload, PROJECT_RULES)?;

        let id = self
            .repository
            .insert(&ProjectFields::from_payload(payload))
            .await
            .map_err(AppError::store("Error creating project"))?;

        tracing::info!(project_id = id, "Created project");
        Ok(id)
    }

    pub async fn update_project(&self, id: i32, payload: ProjectPayload) -> AppResult<()> {
        validate(&payload, PROJECT_RULES)?;

        let affected = self
            .repository
            .update(id, &ProjectFields::from_payload(payload))
            .await
            .map_err(AppError::store("Error updating project"))?;

        if affected == 0 {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        tracing::info!(project_id = id, "Updated project");
        Ok(())
    }

    pub async fn delete_project(&self, id: i32) -> AppResult<()> {
        let affected = self
            .repository
            .delete(id)
            .await
            .map_err(AppError::store("Error deleting project"))?;

        if affected == 0 {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        tracing::info!(project_id = id, "Deleted project");
        Ok(())
    }
}
