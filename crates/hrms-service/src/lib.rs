//! HR records business layer
//!
//! Resource services for departments, jobs, employees and user accounts,
//! plus the integrity checks that keep an employee's department in step with
//! the job it holds.
//!
//! Every service function takes a connection argument. HTTP handlers pass the
//! transaction owned by a [`Session`], so a request either commits all of its
//! writes or none of them.

pub mod department;
pub mod employee;
pub mod error;
mod fields;
pub mod job;
pub mod session;
pub mod user;
pub mod validator;

pub use department::{DepartmentChanges, DepartmentService, NewDepartment};
pub use employee::{EmployeeChanges, EmployeeService, NewEmployee};
pub use error::{Result, ServiceError};
pub use job::{JobChanges, JobService, NewJob};
pub use session::Session;
pub use user::{NewUser, UserChanges, UserService};

pub use hrms_db::entities;
pub use hrms_db::entities::employee::EmployeeStatus;
