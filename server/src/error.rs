//! Server error types and their HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use shared::{Component, SharedError, component_error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("{entity} not found with ID: {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("{entity} already exists: {detail}")]
    Conflict { entity: &'static str, detail: String },

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("HTTP server startup failed on {address}")]
    ServerStartupFailed { address: String },

    #[error(transparent)]
    SharedError(#[from] SharedError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ServerError {
    pub fn not_found(entity: &'static str, id: impl Into<i64>) -> Self {
        ServerError::NotFound { entity, id: id.into() }
    }

    /// HTTP status this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServerError::Conflict { .. } => StatusCode::CONFLICT,
            ServerError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            ServerError::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            component_error!(Component::current(), error = %self, "❌ Request failed");
        }

        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
