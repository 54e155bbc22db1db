//! Initial schema: departments, jobs, employees and users

use sea_orm::DatabaseBackend;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();

        // ============================================================
        // 1. Create departments table
        // ============================================================
        let mut departments = Table::create()
            .table(Department::Table)
            .if_not_exists()
            .col(pk_auto(Department::Id))
            .col(string_len(Department::Name, 255).not_null().unique_key())
            .col(integer_null(Department::LeaderId))
            .to_owned();

        // departments <-> employees is circular. SQLite resolves foreign key
        // targets lazily and cannot add constraints to existing tables, so the
        // key is declared inline there and added after `employees` elsewhere.
        if backend == DatabaseBackend::Sqlite {
            departments.foreign_key(&mut leader_foreign_key());
        }

        manager.create_table(departments).await?;

        // ============================================================
        // 2. Create jobs table
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(pk_auto(Job::Id))
                    .col(string_len(Job::Name, 255).not_null().unique_key())
                    .col(string_len(Job::Code, 4).not_null().unique_key())
                    .col(integer(Job::DepartmentId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_jobs_department_id")
                            .from(Job::Table, Job::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_jobs_department_id")
                    .table(Job::Table)
                    .col(Job::DepartmentId)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 3. Create employees table
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(pk_auto(Employee::Id))
                    .col(string_len(Employee::Name, 255).not_null())
                    .col(string_len(Employee::LastName, 255).not_null())
                    .col(
                        string_len(Employee::RegisterNumber, 64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(integer(Employee::JobId).not_null())
                    .col(integer(Employee::DepartmentId).not_null())
                    .col(double(Employee::Salary).not_null())
                    .col(
                        string_len(Employee::Status, 16)
                            .not_null()
                            .default("active"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_job_id")
                            .from(Employee::Table, Employee::JobId)
                            .to(Job::Table, Job::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_department_id")
                            .from(Employee::Table, Employee::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_employees_job_id")
                    .table(Employee::Table)
                    .col(Employee::JobId)
                    .to_owned(),
            )
            .await?;

        if backend != DatabaseBackend::Sqlite {
            manager.create_foreign_key(leader_foreign_key()).await?;
        }

        // ============================================================
        // 4. Create users table
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_len(User::Login, 255).not_null().unique_key())
                    .col(string_len(User::Passw, 255).not_null())
                    .col(integer_null(User::EmployeeId).unique_key())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_employee_id")
                            .from(User::Table, User::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.get_database_backend() != DatabaseBackend::Sqlite {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name("fk_departments_leader_id")
                        .table(Department::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(User::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Employee::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Job::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Department::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

fn leader_foreign_key() -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name("fk_departments_leader_id")
        .from(Department::Table, Department::LeaderId)
        .to(Employee::Table, Employee::Id)
        .on_delete(ForeignKeyAction::NoAction)
        .on_update(ForeignKeyAction::NoAction)
        .to_owned()
}

#[derive(DeriveIden)]
enum Department {
    #[sea_orm(iden = "departments")]
    Table,
    Id,
    Name,
    LeaderId,
}

#[derive(DeriveIden)]
enum Job {
    #[sea_orm(iden = "jobs")]
    Table,
    Id,
    Name,
    Code,
    DepartmentId,
}

#[derive(DeriveIden)]
enum Employee {
    #[sea_orm(iden = "employees")]
    Table,
    Id,
    Name,
    LastName,
    RegisterNumber,
    JobId,
    DepartmentId,
    Salary,
    Status,
}

#[derive(DeriveIden)]
enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Login,
    Passw,
    EmployeeId,
}
