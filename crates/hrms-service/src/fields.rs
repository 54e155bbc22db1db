//! Field-level checks shared by the create and update paths

use crate::error::{Result, ServiceError};

/// Job codes are short mnemonics (`DEVP`, `LEAD`, ...)
pub(crate) const JOB_CODE_MAX_LEN: usize = 4;

pub(crate) fn require_text(field: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(ServiceError::Validation(format!(
            "Field '{}' must not be empty",
            field
        )));
    }
    Ok(value)
}

pub(crate) fn require_job_code(code: String) -> Result<String> {
    let code = require_text("code", code)?;
    if code.chars().count() > JOB_CODE_MAX_LEN {
        return Err(ServiceError::Validation(format!(
            "Job code '{}' exceeds {} characters",
            code, JOB_CODE_MAX_LEN
        )));
    }
    Ok(code)
}

pub(crate) fn require_salary(salary: f64) -> Result<f64> {
    if !salary.is_finite() || salary < 0.0 {
        return Err(ServiceError::Validation(format!(
            "Salary must be a non-negative amount, got {}",
            salary
        )));
    }
    Ok(salary)
}
