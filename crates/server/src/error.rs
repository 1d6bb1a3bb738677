use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::services::status_coordinator::CoordinationError;
use thiserror::Error;
use utils::response::ApiResponse;

/// Transport-level error taxonomy. Service errors are mapped here at the
/// boundary; unexpected detail never reaches the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication required")]
    AuthenticationRequired,
    #[error("resource not found")]
    NotFound,
    #[error("invalid request: {0}")]
    ValidationFailed(String),
    #[error("the project was modified concurrently, please retry")]
    Conflict,
    #[error("internal server error")]
    Internal,
}

impl From<CoordinationError> for ApiError {
    fn from(err: CoordinationError) -> Self {
        match err {
            CoordinationError::ProjectNotFound => ApiError::NotFound,
            CoordinationError::Conflict => ApiError::Conflict,
            CoordinationError::Database(e) => {
                tracing::error!(error = %e, "database error");
                ApiError::Internal
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound,
            e => {
                tracing::error!(error = %e, "database error");
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ApiResponse::<()>::error(self.to_string()))).into_response()
    }
}
