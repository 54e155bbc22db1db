//! Employee resource service and the promotion workflow
//!
//! There is no generic update for employees: [`EmployeeService::promote`] is
//! the only path that changes name, job or salary, and
//! [`EmployeeService::archive`] is the only path that changes status.

use hrms_db::entities::employee::{self, EmployeeStatus};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::info;

use crate::error::{Result, ServiceError};
use crate::fields::{require_salary, require_text};
use crate::validator;

#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub last_name: String,
    pub register_number: String,
    pub job_id: i32,
    pub salary: f64,
    /// Defaults to [`EmployeeStatus::Active`]
    pub status: Option<EmployeeStatus>,
    /// Ignored; the department always comes from the job
    pub department_id: Option<i32>,
}

/// Fields a promotion may change. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub job_id: Option<i32>,
    pub salary: Option<f64>,
}

pub struct EmployeeService;

impl EmployeeService {
    pub async fn create<C: ConnectionTrait>(db: &C, input: NewEmployee) -> Result<employee::Model> {
        let status = input.status.unwrap_or_default();

        let mut active = employee::ActiveModel {
            name: Set(require_text("name", input.name)?),
            last_name: Set(require_text("last_name", input.last_name)?),
            register_number: Set(require_text("register_number", input.register_number)?),
            job_id: Set(input.job_id),
            salary: Set(require_salary(input.salary)?),
            status: Set(status),
            ..Default::default()
        };
        if let Some(department_id) = input.department_id {
            active.department_id = Set(department_id);
        }

        if status == EmployeeStatus::Active {
            let target = validator::lock_target_job(db, input.job_id).await?;
            validator::ensure_leadership_slot_free(db, &target, None).await?;
        }
        validator::on_employee_write(db, &mut active).await?;

        let created = active.insert(db).await?;
        info!(
            "Created employee {} with job {} in department {}",
            created.id, created.job_id, created.department_id
        );
        Ok(created)
    }

    /// Every employee, archived ones included, ordered by id
    pub async fn get_all<C: ConnectionTrait>(db: &C) -> Result<Vec<employee::Model>> {
        Ok(employee::Entity::find()
            .order_by_asc(employee::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn get_all_with_status<C: ConnectionTrait>(
        db: &C,
        status: EmployeeStatus,
    ) -> Result<Vec<employee::Model>> {
        Ok(employee::Entity::find()
            .filter(employee::Column::Status.eq(status))
            .order_by_asc(employee::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<employee::Model> {
        employee::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Employee", id))
    }

    /// Apply a promotion.
    ///
    /// Every check runs before the row is written, so a rejected promotion
    /// leaves the employee exactly as it was. Moving into a leadership job
    /// held by another active employee fails with `PromotionConflict`.
    pub async fn promote<C: ConnectionTrait>(
        db: &C,
        id: i32,
        changes: EmployeeChanges,
    ) -> Result<employee::Model> {
        let current = Self::get_by_id(db, id).await?;
        let mut active: employee::ActiveModel = current.clone().into();

        if let Some(name) = changes.name {
            active.name = Set(require_text("name", name)?);
        }
        if let Some(last_name) = changes.last_name {
            active.last_name = Set(require_text("last_name", last_name)?);
        }
        if let Some(salary) = changes.salary {
            active.salary = Set(require_salary(salary)?);
        }

        let new_job = changes.job_id.filter(|job_id| *job_id != current.job_id);
        if let Some(job_id) = new_job {
            let target = validator::lock_target_job(db, job_id).await?;
            validator::ensure_leadership_slot_free(db, &target, Some(current.id)).await?;
            active.job_id = Set(job_id);
            validator::on_employee_write(db, &mut active).await?;
        }

        if !active.is_changed() {
            return Ok(current);
        }

        let updated = active.update(db).await?;
        match new_job {
            Some(job_id) => info!(
                "Promoted employee {} from job {} to job {}",
                updated.id, current.job_id, job_id
            ),
            None => info!("Updated employee {}", updated.id),
        }
        Ok(updated)
    }

    /// Mark an employee archived. Archiving twice is a no-op.
    pub async fn archive<C: ConnectionTrait>(db: &C, id: i32) -> Result<employee::Model> {
        let current = Self::get_by_id(db, id).await?;
        if current.status == EmployeeStatus::Archived {
            return Ok(current);
        }

        let mut active: employee::ActiveModel = current.into();
        active.status = Set(EmployeeStatus::Archived);

        let updated = active.update(db).await?;
        info!("Archived employee {}", updated.id);
        Ok(updated)
    }

    /// Hard-delete an employee.
    ///
    /// Departments led by the employee lose their leader and a linked user
    /// account is unlinked, so no dangling reference survives the delete.
    pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<()> {
        let existing = Self::get_by_id(db, id).await?;
        validator::release_employee_references(db, id).await?;
        existing.delete(db).await?;
        info!("Deleted employee {}", id);
        Ok(())
    }
}
