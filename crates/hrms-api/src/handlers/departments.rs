use axum::{
    extract::{Path, State},
    Json,
};
use hrms_service::DepartmentService;
use std::sync::Arc;
use tracing::debug;

use super::{open_session, ApiResult};
use crate::models::*;
use crate::AppState;

/// Create a department
#[utoipa::path(
    post,
    path = "/departments",
    request_body = CreateDepartmentRequest,
    responses(
        (status = 200, description = "Department created", body = Department),
        (status = 500, description = "Duplicate name or unknown leader", body = ErrorResponse)
    ),
    tag = "departments"
)]
pub async fn create_department(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateDepartmentRequest>,
) -> ApiResult<Department> {
    let session = open_session(&state).await?;
    let created = DepartmentService::create(session.conn(), req.into()).await?;
    session.commit().await?;

    Ok(Json(created.into()))
}

/// List all departments
#[utoipa::path(
    get,
    path = "/departments",
    responses(
        (status = 200, description = "List of departments", body = [Department]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "departments"
)]
pub async fn list_departments(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Department>> {
    debug!("Listing departments");

    let session = open_session(&state).await?;
    let departments = DepartmentService::get_all(session.conn()).await?;
    session.commit().await?;

    Ok(Json(departments.into_iter().map(Into::into).collect()))
}

/// Get a department by ID
#[utoipa::path(
    get,
    path = "/departments/{id}",
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department information", body = Department),
        (status = 500, description = "Department not found", body = ErrorResponse)
    ),
    tag = "departments"
)]
pub async fn get_department(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<Department> {
    let session = open_session(&state).await?;
    let department = DepartmentService::get_by_id(session.conn(), id).await?;
    session.commit().await?;

    Ok(Json(department.into()))
}

/// Update a department
#[utoipa::path(
    put,
    path = "/departments/{id}",
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    request_body = UpdateDepartmentRequest,
    responses(
        (status = 200, description = "Department updated", body = Department),
        (status = 500, description = "Department not found or invalid change", body = ErrorResponse)
    ),
    tag = "departments"
)]
pub async fn update_department(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateDepartmentRequest>,
) -> ApiResult<Department> {
    let session = open_session(&state).await?;
    let updated = DepartmentService::update(session.conn(), id, req.into()).await?;
    session.commit().await?;

    Ok(Json(updated.into()))
}

/// Delete a department
#[utoipa::path(
    delete,
    path = "/departments/{id}",
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department deleted", body = MessageResponse),
        (status = 500, description = "Department not found or still referenced", body = ErrorResponse)
    ),
    tag = "departments"
)]
pub async fn delete_department(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<MessageResponse> {
    let session = open_session(&state).await?;
    DepartmentService::delete(session.conn(), id).await?;
    session.commit().await?;

    Ok(Json(MessageResponse::new("Department deleted successfully")))
}
