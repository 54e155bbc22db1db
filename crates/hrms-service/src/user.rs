//! User account resource service
//!
//! Passwords are stored and returned as plain text.

use hrms_db::entities::user;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryOrder, Set};
use tracing::info;

use crate::error::{Result, ServiceError};
use crate::fields::require_text;
use crate::validator;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub login: String,
    pub passw: String,
    pub employee_id: Option<i32>,
}

/// Partial user update; `None` leaves a field untouched.
///
/// `employee_id` is doubly optional: `Some(None)` unlinks the employee.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub login: Option<String>,
    pub passw: Option<String>,
    pub employee_id: Option<Option<i32>>,
}

pub struct UserService;

impl UserService {
    pub async fn create<C: ConnectionTrait>(db: &C, input: NewUser) -> Result<user::Model> {
        let login = require_text("login", input.login)?;
        let passw = require_text("passw", input.passw)?;
        if let Some(employee_id) = input.employee_id {
            validator::ensure_employee_exists(db, employee_id).await?;
        }

        let created = user::ActiveModel {
            login: Set(login),
            passw: Set(passw),
            employee_id: Set(input.employee_id),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!("Created user {} ({})", created.id, created.login);
        Ok(created)
    }

    pub async fn get_all<C: ConnectionTrait>(db: &C) -> Result<Vec<user::Model>> {
        Ok(user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<user::Model> {
        user::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))
    }

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        id: i32,
        changes: UserChanges,
    ) -> Result<user::Model> {
        let current = Self::get_by_id(db, id).await?;
        let mut active: user::ActiveModel = current.clone().into();

        if let Some(login) = changes.login {
            active.login = Set(require_text("login", login)?);
        }
        if let Some(passw) = changes.passw {
            active.passw = Set(require_text("passw", passw)?);
        }
        if let Some(employee_id) = changes.employee_id {
            if let Some(employee_id) = employee_id {
                validator::ensure_employee_exists(db, employee_id).await?;
            }
            active.employee_id = Set(employee_id);
        }

        if !active.is_changed() {
            return Ok(current);
        }

        let updated = active.update(db).await?;
        info!("Updated user {}", updated.id);
        Ok(updated)
    }

    /// Replace the stored password; no other field is touched.
    pub async fn change_password<C: ConnectionTrait>(
        db: &C,
        id: i32,
        passw: String,
    ) -> Result<user::Model> {
        let current = Self::get_by_id(db, id).await?;
        let mut active: user::ActiveModel = current.into();
        active.passw = Set(require_text("passw", passw)?);

        let updated = active.update(db).await?;
        info!("Changed password for user {}", updated.id);
        Ok(updated)
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<()> {
        let existing = Self::get_by_id(db, id).await?;
        existing.delete(db).await?;
        info!("Deleted user {}", id);
        Ok(())
    }
}
