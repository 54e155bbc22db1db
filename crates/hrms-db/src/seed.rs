//! Demo data for fresh installations
//!
//! Seeds two departments, three jobs (one of them a leadership job), one
//! employee per job, a linked user account for each employee and a
//! standalone `admin` account.

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set,
    TransactionTrait,
};
use tracing::info;

use crate::entities::{department, employee, job, user};

const DEMO_JOBS: [(&str, &str, usize, bool); 3] = [
    ("Python Developer", "DEVP", 0, false),
    ("Tech Lead", "LEAD", 0, true),
    ("HR Coordinator", "CDRH", 1, false),
];

const DEMO_EMPLOYEES: [(&str, &str, &str, f64); 3] = [
    ("Ana", "Souza", "10231", 5200.0),
    ("Bruno", "Lima", "20457", 9400.0),
    ("Carla", "Mendes", "31890", 7100.0),
];

const DEMO_LOGINS: [&str; 3] = [
    "dev@company.com.br",
    "tech@company.com.br",
    "hr@company.com.br",
];

/// Insert demo records if the database holds no departments yet.
///
/// Returns `true` when data was inserted, `false` when the database was
/// already populated.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<bool, DbErr> {
    if department::Entity::find().count(db).await? > 0 {
        info!("Database already populated, skipping demo data");
        return Ok(false);
    }

    let txn = db.begin().await?;

    let mut departments = Vec::new();
    for name in ["Information Technology", "Human Resources"] {
        let model = department::ActiveModel {
            name: Set(name.to_string()),
            leader_id: Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        departments.push(model);
    }

    let mut jobs = Vec::new();
    for (name, code, department_idx, is_leadership) in DEMO_JOBS {
        let model = job::ActiveModel {
            name: Set(name.to_string()),
            code: Set(code.to_string()),
            department_id: Set(departments[department_idx].id),
            is_leadership: Set(is_leadership),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        jobs.push(model);
    }

    for ((held_job, (name, last_name, register_number, salary)), login) in
        jobs.iter().zip(DEMO_EMPLOYEES).zip(DEMO_LOGINS)
    {
        let employee = employee::ActiveModel {
            name: Set(name.to_string()),
            last_name: Set(last_name.to_string()),
            register_number: Set(register_number.to_string()),
            job_id: Set(held_job.id),
            department_id: Set(held_job.department_id),
            salary: Set(salary),
            status: Set(employee::EmployeeStatus::Active),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        user::ActiveModel {
            login: Set(login.to_string()),
            passw: Set(format!("demo-{}", register_number)),
            employee_id: Set(Some(employee.id)),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    user::ActiveModel {
        login: Set("admin".to_string()),
        passw: Set("admin".to_string()),
        employee_id: Set(None),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    info!(
        "Demo data inserted: {} departments, {} jobs, {} employees",
        departments.len(),
        jobs.len(),
        DEMO_EMPLOYEES.len()
    );

    Ok(true)
}
