//! Job resource service

use hrms_db::entities::{employee, job};
use hrms_db::entities::employee::EmployeeStatus;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use tracing::info;

use crate::error::{Result, ServiceError};
use crate::fields::{require_job_code, require_text};
use crate::validator;

#[derive(Debug, Clone)]
pub struct NewJob {
    pub name: String,
    pub code: String,
    pub department_id: i32,
    pub is_leadership: bool,
}

/// Partial job update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct JobChanges {
    pub name: Option<String>,
    pub code: Option<String>,
    pub department_id: Option<i32>,
    pub is_leadership: Option<bool>,
}

pub struct JobService;

impl JobService {
    pub async fn create<C: ConnectionTrait>(db: &C, input: NewJob) -> Result<job::Model> {
        let name = require_text("name", input.name)?;
        let code = require_job_code(input.code)?;
        validator::ensure_department_exists(db, input.department_id).await?;

        let created = job::ActiveModel {
            name: Set(name),
            code: Set(code),
            department_id: Set(input.department_id),
            is_leadership: Set(input.is_leadership),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!(
            "Created job {} ({}) in department {}",
            created.id, created.code, created.department_id
        );
        Ok(created)
    }

    pub async fn get_all<C: ConnectionTrait>(db: &C) -> Result<Vec<job::Model>> {
        Ok(job::Entity::find()
            .order_by_asc(job::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<job::Model> {
        job::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Job", id))
    }

    /// Apply a partial update.
    ///
    /// Moving the job to another department moves its employees with it.
    /// Flagging a job as leadership fails if more than one active employee
    /// already holds it.
    pub async fn update<C: ConnectionTrait>(
        db: &C,
        id: i32,
        changes: JobChanges,
    ) -> Result<job::Model> {
        let current = Self::get_by_id(db, id).await?;
        let mut active: job::ActiveModel = current.clone().into();

        if let Some(name) = changes.name {
            active.name = Set(require_text("name", name)?);
        }
        if let Some(code) = changes.code {
            active.code = Set(require_job_code(code)?);
        }

        let moved_to = changes
            .department_id
            .filter(|department_id| *department_id != current.department_id);
        if let Some(department_id) = moved_to {
            validator::ensure_department_exists(db, department_id).await?;
            active.department_id = Set(department_id);
        }

        if let Some(is_leadership) = changes.is_leadership {
            if is_leadership && !current.is_leadership {
                let holders = employee::Entity::find()
                    .filter(employee::Column::JobId.eq(id))
                    .filter(employee::Column::Status.eq(EmployeeStatus::Active))
                    .count(db)
                    .await?;
                if holders > 1 {
                    return Err(ServiceError::Validation(format!(
                        "Job {} has {} active employees and cannot become a leadership job",
                        id, holders
                    )));
                }
            }
            active.is_leadership = Set(is_leadership);
        }

        if !active.is_changed() {
            return Ok(current);
        }

        let updated = active.update(db).await?;
        if let Some(department_id) = moved_to {
            validator::on_job_department_change(db, updated.id, department_id).await?;
        }

        info!("Updated job {}", updated.id);
        Ok(updated)
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<()> {
        let existing = Self::get_by_id(db, id).await?;
        existing.delete(db).await?;
        info!("Deleted job {}", id);
        Ok(())
    }
}
