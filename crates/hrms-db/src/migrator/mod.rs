//! Database migrations

use sea_orm_migration::prelude::*;

mod m20241104_000001_create_hr_tables;
mod m20241118_000001_add_job_is_leadership;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241104_000001_create_hr_tables::Migration),
            Box::new(m20241118_000001_add_job_is_leadership::Migration),
        ]
    }
}
