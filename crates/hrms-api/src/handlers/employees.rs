use axum::{
    extract::{Path, Query, State},
    Json,
};
use hrms_service::EmployeeService;
use std::sync::Arc;
use tracing::debug;

use super::{open_session, ApiResult};
use crate::error::ApiError;
use crate::models::*;
use crate::AppState;

/// Hire an employee
///
/// The department is always taken from the job; a `department_id` in the
/// body is ignored.
#[utoipa::path(
    post,
    path = "/employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 200, description = "Employee created", body = Employee),
        (status = 500, description = "Unknown job, duplicate register number or occupied leadership job", body = ErrorResponse)
    ),
    tag = "employees"
)]
pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateEmployeeRequest>,
) -> ApiResult<Employee> {
    let session = open_session(&state).await?;
    let created = EmployeeService::create(session.conn(), req.into()).await?;
    session.commit().await?;

    Ok(Json(created.into()))
}

/// List employees, archived ones included unless filtered by status
#[utoipa::path(
    get,
    path = "/employees",
    params(
        ("status" = Option<EmployeeStatus>, Query, description = "Only return employees with this status")
    ),
    responses(
        (status = 200, description = "List of employees", body = [Employee]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "employees"
)]
pub async fn list_employees(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EmployeeListQuery>,
) -> ApiResult<Vec<Employee>> {
    debug!("Listing employees (status: {:?})", query.status);

    let session = open_session(&state).await?;
    let employees = match query.status {
        Some(status) => EmployeeService::get_all_with_status(session.conn(), status.into()).await?,
        None => EmployeeService::get_all(session.conn()).await?,
    };
    session.commit().await?;

    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// Get an employee by ID
#[utoipa::path(
    get,
    path = "/employees/{id}",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee information", body = Employee),
        (status = 404, description = "Employee not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "employees"
)]
pub async fn get_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<Employee> {
    let session = open_session(&state).await?;
    let employee = EmployeeService::get_by_id(session.conn(), id)
        .await
        .map_err(ApiError::lookup)?;
    session.commit().await?;

    Ok(Json(employee.into()))
}

/// Promote an employee
///
/// Changes name, job or salary. A new job brings its department along.
/// Moving into a leadership job held by another active employee is rejected
/// and nothing is changed.
#[utoipa::path(
    put,
    path = "/employees/{id}/promote",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    request_body = PromoteEmployeeRequest,
    responses(
        (status = 200, description = "Employee promoted", body = Employee),
        (status = 500, description = "Employee or job not found, or leadership conflict", body = ErrorResponse)
    ),
    tag = "employees"
)]
pub async fn promote_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(req): Json<PromoteEmployeeRequest>,
) -> ApiResult<Employee> {
    let session = open_session(&state).await?;
    let promoted = EmployeeService::promote(session.conn(), id, req.into()).await?;
    session.commit().await?;

    Ok(Json(promoted.into()))
}

/// Archive an employee
///
/// Archiving an already archived employee succeeds without changes.
#[utoipa::path(
    put,
    path = "/employees/{id}/archive",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee archived", body = Employee),
        (status = 500, description = "Employee not found", body = ErrorResponse)
    ),
    tag = "employees"
)]
pub async fn archive_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<Employee> {
    let session = open_session(&state).await?;
    let archived = EmployeeService::archive(session.conn(), id).await?;
    session.commit().await?;

    Ok(Json(archived.into()))
}

/// Delete an employee
///
/// Department leaderships and user links held by the employee are cleared.
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee deleted", body = MessageResponse),
        (status = 500, description = "Employee not found", body = ErrorResponse)
    ),
    tag = "employees"
)]
pub async fn delete_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<MessageResponse> {
    let session = open_session(&state).await?;
    EmployeeService::delete(session.conn(), id).await?;
    session.commit().await?;

    Ok(Json(MessageResponse::new("Employee deleted successfully")))
}
