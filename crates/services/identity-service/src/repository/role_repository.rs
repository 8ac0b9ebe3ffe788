//! Role repository implementation.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::entities::role::{self, Entity as RoleEntity};
use super::user_repository::db_failure;
use domain::{CollaboratorError, CollaboratorResult, Role, RoleStore};

/// Read-only role lookup backed by the `roles` table.
pub struct SeaRoleStore {
    db: DatabaseConnection,
}

impl SeaRoleStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleStore for SeaRoleStore {
    async fn find_by_name(&self, name: &str) -> CollaboratorResult<Option<Role>> {
        let model = RoleEntity::find()
            .filter(role::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_failure)?;

        model
            .map(Role::try_from)
            .transpose()
            .map_err(|e| CollaboratorError::failure(format!("Corrupt role row: {}", e)))
    }
}
