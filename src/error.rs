use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use serde_json::json;
use sqlx::Error as SqlxError;
use std::fmt;
use thiserror::Error as ThisError;
use tracing::error;

/// Catalog resources that can be looked up by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    People,
    Planet,
    User,
    Favorite,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::People => "People",
            Resource::Planet => "Planet",
            Resource::User => "User",
            Resource::Favorite => "Favorite",
        };
        f.write_str(name)
    }
}

#[derive(Debug, ThisError)]
pub enum HolocronError {
    #[error("{0} not found")]
    NotFound(Resource),

    #[error("{message}")]
    Api { status: StatusCode, message: String },

    #[error("favorite row {id} does not reference exactly one target")]
    CorruptFavorite { id: i64 },

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl HolocronError {
    pub fn api(status: StatusCode, message: impl Into<String>) -> Self {
        HolocronError::Api {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for HolocronError {
    fn into_response(self) -> axum::response::Response {
        match self {
            HolocronError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                Json(ApiErrorBody {
                    error: format!("{resource} not found"),
                }),
            )
                .into_response(),
            HolocronError::Api { status, message } => {
                (status, Json(json!({ "message": message }))).into_response()
            }
            HolocronError::CorruptFavorite { .. }
            | HolocronError::DatabaseError(_)
            | HolocronError::JsonError(_)
            | HolocronError::IoError(_) => {
                error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiErrorBody {
                        error: "An internal server error occurred.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}
