//! HTTP error rendering
//!
//! Service failures answer `500` with the error code in the body. The only
//! lookup that answers `404` is `GET /employees/{id}`; existing clients rely
//! on that split.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hrms_service::ServiceError;
use tracing::{error, warn};

use crate::models::ErrorResponse;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    fn with_status(status: StatusCode, err: &ServiceError) -> Self {
        Self {
            status,
            body: ErrorResponse {
                error: err.to_string(),
                code: Some(err.code().to_string()),
            },
        }
    }

    /// Like the `From<ServiceError>` conversion, but a missing row answers `404`.
    pub fn lookup(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound { .. } => Self::with_status(StatusCode::NOT_FOUND, &err),
            other => other.into(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match &err {
            ServiceError::Database(e) => error!("Database error: {}", e),
            other => warn!("Request rejected: {}", other),
        }
        Self::with_status(StatusCode::INTERNAL_SERVER_ERROR, &err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
