use axum::{
    extract::{Path, State},
    Json,
};
use hrms_service::JobService;
use std::sync::Arc;
use tracing::debug;

use super::{open_session, ApiResult};
use crate::models::*;
use crate::AppState;

/// Create a job
#[utoipa::path(
    post,
    path = "/jobs",
    request_body = CreateJobRequest,
    responses(
        (status = 200, description = "Job created", body = Job),
        (status = 500, description = "Duplicate name or code, or unknown department", body = ErrorResponse)
    ),
    tag = "jobs"
)]
pub async fn create_job(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateJobRequest>,
) -> ApiResult<Job> {
    let session = open_session(&state).await?;
    let created = JobService::create(session.conn(), req.into()).await?;
    session.commit().await?;

    Ok(Json(created.into()))
}

/// List all jobs
#[utoipa::path(
    get,
    path = "/jobs",
    responses(
        (status = 200, description = "List of jobs", body = [Job]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "jobs"
)]
pub async fn list_jobs(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Job>> {
    debug!("Listing jobs");

    let session = open_session(&state).await?;
    let jobs = JobService::get_all(session.conn()).await?;
    session.commit().await?;

    Ok(Json(jobs.into_iter().map(Into::into).collect()))
}

/// Get a job by ID
#[utoipa::path(
    get,
    path = "/jobs/{id}",
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job information", body = Job),
        (status = 500, description = "Job not found", body = ErrorResponse)
    ),
    tag = "jobs"
)]
pub async fn get_job(State(state): State<Arc<AppState>>, Path(id): Path<i32>) -> ApiResult<Job> {
    let session = open_session(&state).await?;
    let job = JobService::get_by_id(session.conn(), id).await?;
    session.commit().await?;

    Ok(Json(job.into()))
}

/// Update a job
///
/// Moving a job to another department moves every employee holding it.
#[utoipa::path(
    put,
    path = "/jobs/{id}",
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    request_body = UpdateJobRequest,
    responses(
        (status = 200, description = "Job updated", body = Job),
        (status = 500, description = "Job not found or invalid change", body = ErrorResponse)
    ),
    tag = "jobs"
)]
pub async fn update_job(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateJobRequest>,
) -> ApiResult<Job> {
    let session = open_session(&state).await?;
    let updated = JobService::update(session.conn(), id, req.into()).await?;
    session.commit().await?;

    Ok(Json(updated.into()))
}

/// Delete a job
#[utoipa::path(
    delete,
    path = "/jobs/{id}",
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job deleted", body = MessageResponse),
        (status = 500, description = "Job not found or still held", body = ErrorResponse)
    ),
    tag = "jobs"
)]
pub async fn delete_job(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<MessageResponse> {
    let session = open_session(&state).await?;
    JobService::delete(session.conn(), id).await?;
    session.commit().await?;

    Ok(Json(MessageResponse::new("Job deleted successfully")))
}
