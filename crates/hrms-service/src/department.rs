//! Department resource service

use hrms_db::entities::department;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryOrder, Set};
use tracing::info;

use crate::error::{Result, ServiceError};
use crate::fields::require_text;
use crate::validator;

#[derive(Debug, Clone)]
pub struct NewDepartment {
    pub name: String,
    pub leader_id: Option<i32>,
}

/// Partial department update; `None` leaves a field untouched.
///
/// `leader_id` is doubly optional: `Some(None)` clears the leader.
#[derive(Debug, Clone, Default)]
pub struct DepartmentChanges {
    pub name: Option<String>,
    pub leader_id: Option<Option<i32>>,
}

pub struct DepartmentService;

impl DepartmentService {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        input: NewDepartment,
    ) -> Result<department::Model> {
        let name = require_text("name", input.name)?;
        if let Some(leader_id) = input.leader_id {
            validator::ensure_employee_exists(db, leader_id).await?;
        }

        let created = department::ActiveModel {
            name: Set(name),
            leader_id: Set(input.leader_id),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!("Created department {} ({})", created.id, created.name);
        Ok(created)
    }

    pub async fn get_all<C: ConnectionTrait>(db: &C) -> Result<Vec<department::Model>> {
        Ok(department::Entity::find()
            .order_by_asc(department::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<department::Model> {
        department::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Department", id))
    }

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        id: i32,
        changes: DepartmentChanges,
    ) -> Result<department::Model> {
        let current = Self::get_by_id(db, id).await?;
        let mut active: department::ActiveModel = current.clone().into();

        if let Some(name) = changes.name {
            active.name = Set(require_text("name", name)?);
        }
        if let Some(leader_id) = changes.leader_id {
            if let Some(leader_id) = leader_id {
                validator::ensure_employee_exists(db, leader_id).await?;
            }
            active.leader_id = Set(leader_id);
        }

        if !active.is_changed() {
            return Ok(current);
        }

        let updated = active.update(db).await?;
        info!("Updated department {}", updated.id);
        Ok(updated)
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<()> {
        let existing = Self::get_by_id(db, id).await?;
        existing.delete(db).await?;
        info!("Deleted department {}", id);
        Ok(())
    }
}
