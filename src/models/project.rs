use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Request body for creating or replacing a project
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProjectPayload {
    #[schema(max_length = 255, example = "Website relaunch")]
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Writable columns of a project row, written in full on insert and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFields {
    pub name: String,
    pub description: Option<String>,
}
