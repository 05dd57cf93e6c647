use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database};

use crate::config::Config;
use crate::repositories::{
    ProjectRepository, SeaOrmProjectRepository, SeaOrmTaskRepository, TaskRepository,
};
use crate::services::{Clock, ProjectService, SystemClock, TaskService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub projects: ProjectService,
    pub tasks: TaskService,
}

impl AppState {
    /// Create a new AppState backed by the database named in the config
    pub async fn new(config: &Config) -> Result<Self, AppStateError> {
        // Bounded pool; waiters queue in sqlx, failures are surfaced rather than retried
        let mut opt = ConnectOptions::new(&config.database_url);
        opt.max_connections(config.db_max_connections)
            .min_connections(config.db_min_connections)
            .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
            .sqlx_logging(true);

        let db = Database::connect(opt)
            .await
            .map_err(|e| AppStateError::Database(e.to_string()))?;

        Ok(Self::with_repositories(
            Arc::new(SeaOrmProjectRepository::new(db.clone())),
            Arc::new(SeaOrmTaskRepository::new(db)),
            Arc::new(SystemClock),
        ))
    }

    /// Create AppState from explicit collaborators (in-memory store, fixed clock in tests)
    pub fn with_repositories(
        projects: Arc<dyn ProjectRepository>,
        tasks: Arc<dyn TaskRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            projects: ProjectService::new(projects),
            tasks: TaskService::new(tasks, clock),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("Database connection error: {0}")]
    Database(String),
}
