use hrms_service::entities::{department, employee, job, user};
use hrms_service::{
    DepartmentChanges, EmployeeChanges, JobChanges, NewDepartment, NewEmployee, NewJob, NewUser,
    UserChanges,
};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Distinguish an explicit `null` from an absent field in partial updates.
///
/// Absent fields fall back to `None` through `#[serde(default)]`; a present
/// field, `null` included, is wrapped in `Some`.
fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

// ============================================================
// Departments
// ============================================================

/// Department information
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Department {
    /// Department ID
    pub id: i32,
    /// Department name (unique)
    pub name: String,
    /// Employee leading the department
    pub leader_id: Option<i32>,
}

impl From<department::Model> for Department {
    fn from(model: department::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            leader_id: model.leader_id,
        }
    }
}

/// Request to create a department
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDepartmentRequest {
    /// Department name (unique)
    pub name: String,
    /// Employee leading the department
    #[serde(default)]
    pub leader_id: Option<i32>,
}

impl From<CreateDepartmentRequest> for NewDepartment {
    fn from(req: CreateDepartmentRequest) -> Self {
        Self {
            name: req.name,
            leader_id: req.leader_id,
        }
    }
}

/// Partial department update. Omitted fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateDepartmentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Send `null` to remove the current leader
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<i32>)]
    pub leader_id: Option<Option<i32>>,
}

impl From<UpdateDepartmentRequest> for DepartmentChanges {
    fn from(req: UpdateDepartmentRequest) -> Self {
        Self {
            name: req.name,
            leader_id: req.leader_id,
        }
    }
}

// ============================================================
// Jobs
// ============================================================

/// Job information
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Job {
    /// Job ID
    pub id: i32,
    /// Job title (unique)
    pub name: String,
    /// Short code, up to 4 characters (unique)
    pub code: String,
    /// Department the job belongs to
    pub department_id: i32,
    /// Whether the job is a single-holder leadership position
    pub is_leadership: bool,
}

impl From<job::Model> for Job {
    fn from(model: job::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            code: model.code,
            department_id: model.department_id,
            is_leadership: model.is_leadership,
        }
    }
}

/// Request to create a job
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateJobRequest {
    pub name: String,
    pub department_id: i32,
    pub code: String,
    /// Defaults to `false`
    #[serde(default)]
    pub is_leadership: bool,
}

impl From<CreateJobRequest> for NewJob {
    fn from(req: CreateJobRequest) -> Self {
        Self {
            name: req.name,
            code: req.code,
            department_id: req.department_id,
            is_leadership: req.is_leadership,
        }
    }
}

/// Partial job update. Omitted fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateJobRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Moving a job moves its employees to the new department
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_leadership: Option<bool>,
}

impl From<UpdateJobRequest> for JobChanges {
    fn from(req: UpdateJobRequest) -> Self {
        Self {
            name: req.name,
            code: req.code,
            department_id: req.department_id,
            is_leadership: req.is_leadership,
        }
    }
}

// ============================================================
// Employees
// ============================================================

/// Employment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EmployeeStatus {
    /// Currently employed
    #[serde(alias = "active")]
    Active,
    /// Terminated; kept for records
    #[serde(alias = "archived")]
    Archived,
}

impl From<employee::EmployeeStatus> for EmployeeStatus {
    fn from(status: employee::EmployeeStatus) -> Self {
        match status {
            employee::EmployeeStatus::Active => EmployeeStatus::Active,
            employee::EmployeeStatus::Archived => EmployeeStatus::Archived,
        }
    }
}

impl From<EmployeeStatus> for employee::EmployeeStatus {
    fn from(status: EmployeeStatus) -> Self {
        match status {
            EmployeeStatus::Active => employee::EmployeeStatus::Active,
            EmployeeStatus::Archived => employee::EmployeeStatus::Archived,
        }
    }
}

/// Employee information
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    /// Employee ID
    pub id: i32,
    pub name: String,
    pub last_name: String,
    /// Company register number (unique)
    pub register_number: String,
    /// Job currently held
    pub job_id: i32,
    /// Department of the job currently held
    pub department_id: i32,
    pub salary: f64,
    pub status: EmployeeStatus,
}

impl From<employee::Model> for Employee {
    fn from(model: employee::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            last_name: model.last_name,
            register_number: model.register_number,
            job_id: model.job_id,
            department_id: model.department_id,
            salary: model.salary,
            status: model.status.into(),
        }
    }
}

/// Request to hire an employee
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub last_name: String,
    pub register_number: String,
    pub job_id: i32,
    pub salary: f64,
    /// Defaults to `Active`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
    /// Accepted for compatibility and ignored; derived from `job_id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i32>,
}

impl From<CreateEmployeeRequest> for NewEmployee {
    fn from(req: CreateEmployeeRequest) -> Self {
        Self {
            name: req.name,
            last_name: req.last_name,
            register_number: req.register_number,
            job_id: req.job_id,
            salary: req.salary,
            status: req.status.map(Into::into),
            department_id: req.department_id,
        }
    }
}

/// Promotion request. Omitted fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PromoteEmployeeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// New job; the department follows the job
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

impl From<PromoteEmployeeRequest> for EmployeeChanges {
    fn from(req: PromoteEmployeeRequest) -> Self {
        Self {
            name: req.name,
            last_name: req.last_name,
            job_id: req.job_id,
            salary: req.salary,
        }
    }
}

/// Query parameters for listing employees
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EmployeeListQuery {
    /// Only return employees with this status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
}

// ============================================================
// Users
// ============================================================

/// User account
///
/// `passw` is stored and returned as plain text.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// User ID
    pub id: i32,
    /// Login name (unique)
    pub login: String,
    pub passw: String,
    /// Linked employee
    pub employee_id: Option<i32>,
}

impl From<user::Model> for User {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            login: model.login,
            passw: model.passw,
            employee_id: model.employee_id,
        }
    }
}

/// Request to create a user account
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub login: String,
    pub passw: String,
    #[serde(default)]
    pub employee_id: Option<i32>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            login: req.login,
            passw: req.passw,
            employee_id: req.employee_id,
        }
    }
}

/// Partial user update. Omitted fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passw: Option<String>,
    /// Send `null` to unlink the employee
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<i32>)]
    pub employee_id: Option<Option<i32>>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            login: req.login,
            passw: req.passw,
            employee_id: req.employee_id,
        }
    }
}

/// Request to replace a user's password
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChangePasswordRequest {
    pub passw: String,
}

// ============================================================
// Common
// ============================================================

/// Confirmation message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}
