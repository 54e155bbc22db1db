use axum::{
    extract::{Path, State},
    Json,
};
use hrms_service::UserService;
use std::sync::Arc;
use tracing::debug;

use super::{open_session, ApiResult};
use crate::models::*;
use crate::AppState;

/// Create a user account
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 500, description = "Duplicate login or unknown employee", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<User> {
    let session = open_session(&state).await?;
    let created = UserService::create(session.conn(), req.into()).await?;
    session.commit().await?;

    Ok(Json(created.into()))
}

/// List all user accounts
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "List of users", body = [User]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Vec<User>> {
    debug!("Listing users");

    let session = open_session(&state).await?;
    let users = UserService::get_all(session.conn()).await?;
    session.commit().await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// Get a user account by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User information", body = User),
        (status = 500, description = "User not found", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn get_user(State(state): State<Arc<AppState>>, Path(id): Path<i32>) -> ApiResult<User> {
    let session = open_session(&state).await?;
    let user = UserService::get_by_id(session.conn(), id).await?;
    session.commit().await?;

    Ok(Json(user.into()))
}

/// Update a user account
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 500, description = "User not found or invalid change", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<User> {
    let session = open_session(&state).await?;
    let updated = UserService::update(session.conn(), id, req.into()).await?;
    session.commit().await?;

    Ok(Json(updated.into()))
}

/// Replace a user's password
#[utoipa::path(
    put,
    path = "/users/{id}/password",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = User),
        (status = 500, description = "User not found", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn change_password(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(req): Json<ChangePasswordRequest>,
) -> ApiResult<User> {
    let session = open_session(&state).await?;
    let updated = UserService::change_password(session.conn(), id, req.passw).await?;
    session.commit().await?;

    Ok(Json(updated.into()))
}

/// Delete a user account
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 500, description = "User not found", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<MessageResponse> {
    let session = open_session(&state).await?;
    UserService::delete(session.conn(), id).await?;
    session.commit().await?;

    Ok(Json(MessageResponse::new("User deleted successfully")))
}
