use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::handlers::MessageResponse;

/// Failure surfaced by a repository (connectivity, constraint, timeout)
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias for repositories
pub type StoreResult<T> = Result<T, StoreError>;

/// Application error type that can be returned from handlers
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // 400: malformed or missing input, raised before any store call
    #[error("Validation error: {0}")]
    Validation(String),

    // 404: the store matched or affected zero rows
    #[error("{0}")]
    NotFound(String),

    // 500: the store failed; only `message` reaches the caller
    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    /// Adapter for `map_err` that tags a store failure with the endpoint's generic message
    pub fn store(message: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Store { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg,
            AppError::Store { message, source } => {
                tracing::error!(error = %source, "{}", message);
                message.to_string()
            }
        };

        (status, Json(MessageResponse { message })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
