//! Job entity
//!
//! A job belongs to exactly one department. Employees inherit their
//! department from the job they hold.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Job title (unique)
    #[sea_orm(unique)]
    pub name: String,

    /// Short job code, at most 4 characters (unique)
    #[sea_orm(unique)]
    pub code: String,

    /// Department this job belongs to
    pub department_id: i32,

    /// Leadership jobs are held by at most one active employee
    pub is_leadership: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Department,

    #[sea_orm(has_many = "super::employee::Entity")]
    Employees,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employees.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
