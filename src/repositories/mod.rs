pub mod memory;
pub mod project;
pub mod task;

pub use memory::InMemoryStore;
pub use project::SeaOrmProjectRepository;
pub use task::SeaOrmTaskRepository;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{Project, ProjectFields, Task, TaskFields, TaskFilter};

/// Persistence contract for projects.
///
/// `update` and `delete` report the number of affected rows; deciding that zero
/// means "not found" is left to the service layer.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All projects in the store's natural order
    async fn list(&self) -> StoreResult<Vec<Project>>;

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Project>>;

    /// Insert a row and return the store-assigned id
    async fn insert(&self, fields: &ProjectFields) -> StoreResult<i32>;

    /// Overwrite every writable column of the row
    async fn update(&self, id: i32, fields: &ProjectFields) -> StoreResult<u64>;

    async fn delete(&self, id: i32) -> StoreResult<u64>;
}

/// Persistence contract for tasks
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Tasks matching every populated field of the filter
    async fn list(&self, filter: &TaskFilter) -> StoreResult<Vec<Task>>;

    async fn list_by_project(&self, project_id: i32) -> StoreResult<Vec<Task>>;

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Task>>;

    async fn insert(&self, fields: &TaskFields) -> StoreResult<i32>;

    async fn update(&self, id: i32, fields: &TaskFields) -> StoreResult<u64>;

    async fn delete(&self, id: i32) -> StoreResult<u64>;
}
