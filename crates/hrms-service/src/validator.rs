//! Cross-entity integrity checks
//!
//! Foreign keys guarantee that ids point somewhere. They cannot express that
//! an employee's department must equal the department of its job, or that a
//! leadership job has a single active holder. Those rules live here and are
//! called explicitly by the write paths in [`crate::employee`],
//! [`crate::job`], [`crate::department`] and [`crate::user`] before they
//! commit.

use hrms_db::entities::{department, employee, job, user};
use hrms_db::entities::employee::EmployeeStatus;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbBackend, EntityTrait,
    QueryFilter, QuerySelect, Set,
};
use tracing::{debug, info};

use crate::error::{Result, ServiceError};

/// Look up a job and return the department it belongs to.
///
/// # Errors
/// `InvalidReference` if the job does not exist.
pub async fn resolve_department_for_job<C: ConnectionTrait>(db: &C, job_id: i32) -> Result<i32> {
    let job = job::Entity::find_by_id(job_id)
        .one(db)
        .await?
        .ok_or_else(|| missing_job(job_id))?;

    Ok(job.department_id)
}

/// Derive `department_id` from `job_id` on an employee about to be written.
///
/// Whatever department the caller put on the model is overwritten.
pub async fn on_employee_write<C: ConnectionTrait>(
    db: &C,
    employee: &mut employee::ActiveModel,
) -> Result<()> {
    let job_id = match &employee.job_id {
        ActiveValue::Set(id) | ActiveValue::Unchanged(id) => *id,
        ActiveValue::NotSet => {
            return Err(ServiceError::Validation(
                "Field 'job_id' is required".to_string(),
            ))
        }
    };

    let department_id = resolve_department_for_job(db, job_id).await?;

    if let ActiveValue::Set(supplied) = &employee.department_id {
        if *supplied != department_id {
            debug!(
                "Discarding supplied department {} for job {}, using {}",
                supplied, job_id, department_id
            );
        }
    }

    employee.department_id = Set(department_id);
    Ok(())
}

/// Fetch the job an employee is being moved into.
///
/// On backends with row locks the job row is locked for the rest of the
/// transaction, so two concurrent promotions into the same leadership job
/// are serialised. SQLite serialises writers at the database level.
pub async fn lock_target_job<C: ConnectionTrait>(db: &C, job_id: i32) -> Result<job::Model> {
    let mut query = job::Entity::find_by_id(job_id);
    if db.get_database_backend() != DbBackend::Sqlite {
        query = query.lock_exclusive();
    }

    query.one(db).await?.ok_or_else(|| missing_job(job_id))
}

/// Reject the move if `job` is a leadership job already held by an active
/// employee other than `employee_id`.
pub async fn ensure_leadership_slot_free<C: ConnectionTrait>(
    db: &C,
    job: &job::Model,
    employee_id: Option<i32>,
) -> Result<()> {
    if !job.is_leadership {
        return Ok(());
    }

    let mut holders = employee::Entity::find()
        .filter(employee::Column::JobId.eq(job.id))
        .filter(employee::Column::Status.eq(EmployeeStatus::Active));
    if let Some(employee_id) = employee_id {
        holders = holders.filter(employee::Column::Id.ne(employee_id));
    }

    match holders.one(db).await? {
        Some(holder) => Err(ServiceError::PromotionConflict {
            job_id: job.id,
            holder_id: holder.id,
        }),
        None => Ok(()),
    }
}

pub async fn ensure_department_exists<C: ConnectionTrait>(db: &C, department_id: i32) -> Result<()> {
    department::Entity::find_by_id(department_id)
        .one(db)
        .await?
        .map(|_| ())
        .ok_or_else(|| {
            ServiceError::InvalidReference(format!(
                "Department {} does not exist",
                department_id
            ))
        })
}

pub async fn ensure_employee_exists<C: ConnectionTrait>(db: &C, employee_id: i32) -> Result<()> {
    employee::Entity::find_by_id(employee_id)
        .one(db)
        .await?
        .map(|_| ())
        .ok_or_else(|| {
            ServiceError::InvalidReference(format!("Employee {} does not exist", employee_id))
        })
}

/// Rewrite the department of every employee holding `job_id`.
///
/// Returns the number of employees moved.
pub async fn on_job_department_change<C: ConnectionTrait>(
    db: &C,
    job_id: i32,
    department_id: i32,
) -> Result<u64> {
    let result = employee::Entity::update_many()
        .col_expr(employee::Column::DepartmentId, Expr::value(department_id))
        .filter(employee::Column::JobId.eq(job_id))
        .exec(db)
        .await?;

    if result.rows_affected > 0 {
        info!(
            "Moved {} employee(s) holding job {} to department {}",
            result.rows_affected, job_id, department_id
        );
    }

    Ok(result.rows_affected)
}

/// Clear department leaderships and user links pointing at an employee that
/// is about to be deleted.
pub async fn release_employee_references<C: ConnectionTrait>(db: &C, employee_id: i32) -> Result<()> {
    let led = department::Entity::update_many()
        .col_expr(department::Column::LeaderId, Expr::value(Option::<i32>::None))
        .filter(department::Column::LeaderId.eq(employee_id))
        .exec(db)
        .await?;

    let unlinked = user::Entity::update_many()
        .col_expr(user::Column::EmployeeId, Expr::value(Option::<i32>::None))
        .filter(user::Column::EmployeeId.eq(employee_id))
        .exec(db)
        .await?;

    if led.rows_affected > 0 || unlinked.rows_affected > 0 {
        info!(
            "Released employee {}: cleared {} department leadership(s), {} user link(s)",
            employee_id, led.rows_affected, unlinked.rows_affected
        );
    }

    Ok(())
}

fn missing_job(job_id: i32) -> ServiceError {
    ServiceError::InvalidReference(format!("Job {} does not exist", job_id))
}
