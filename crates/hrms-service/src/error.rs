use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors raised by resource services and the integrity validator
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Missing or malformed field, or a uniqueness collision
    #[error("Validation error: {0}")]
    Validation(String),

    /// A foreign id points at a row that does not exist
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// Leadership job is already held by another active employee
    #[error("Job {job_id} is a leadership position already held by active employee {holder_id}")]
    PromotionConflict { job_id: i32, holder_id: i32 },

    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Database error: {0}")]
    Database(DbErr),
}

impl ServiceError {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "VALIDATION_ERROR",
            ServiceError::InvalidReference(_) => "INVALID_REFERENCE",
            ServiceError::PromotionConflict { .. } => "PROMOTION_CONFLICT",
            ServiceError::NotFound { .. } => "NOT_FOUND",
            ServiceError::Database(_) => "DATABASE_ERROR",
        }
    }

    pub(crate) fn not_found(entity: &'static str, id: i32) -> Self {
        ServiceError::NotFound { entity, id }
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                ServiceError::Validation(format!("Unique constraint violated: {}", detail))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                ServiceError::InvalidReference(detail)
            }
            _ => ServiceError::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ServiceError::Validation("x".into()).code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            ServiceError::PromotionConflict {
                job_id: 1,
                holder_id: 2
            }
            .code(),
            "PROMOTION_CONFLICT"
        );
        assert_eq!(
            ServiceError::not_found("Employee", 7).to_string(),
            "Employee with ID 7 not found"
        );
    }

    #[test]
    fn test_plain_db_error_is_not_reclassified() {
        let err: ServiceError = DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, ServiceError::Database(_)));
    }
}
