//! HTTP handlers
//!
//! Every request runs in its own [`Session`]: the handler opens it, passes its
//! connection to the service layer and commits on success. Returning early
//! with `?` drops the session, which rolls the request's writes back.

pub mod departments;
pub mod employees;
pub mod jobs;
pub mod system;
pub mod users;

use hrms_service::Session;

use crate::error::ApiError;
use crate::AppState;

pub(crate) type ApiResult<T> = Result<axum::Json<T>, ApiError>;

pub(crate) async fn open_session(state: &AppState) -> Result<Session, ApiError> {
    Ok(Session::begin(&state.db).await?)
}
