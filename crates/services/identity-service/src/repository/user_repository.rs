//! User repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set, SqlErr,
};
use uuid::Uuid;

use super::entities::role::{self, Entity as RoleEntity};
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use domain::{CollaboratorError, CollaboratorResult, Role, User, UserStore};

/// User persistence backed by the `users` table.
pub struct SeaUserStore {
    db: DatabaseConnection,
}

impl SeaUserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Log a database error and wrap it as an opaque collaborator failure.
pub(crate) fn db_failure(err: DbErr) -> CollaboratorError {
    tracing::error!("Database error: {:?}", err);
    CollaboratorError::failure(format!("Database error: {}", err))
}

/// Unique violations are kept distinct so registration can report a duplicate email.
pub(crate) fn insert_failure(err: DbErr) -> CollaboratorError {
    classify_insert_failure(err.sql_err(), err)
}

fn classify_insert_failure(sql_err: Option<SqlErr>, err: DbErr) -> CollaboratorError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(detail)) => CollaboratorError::UniqueViolation(detail),
        _ => db_failure(err),
    }
}

#[async_trait]
impl UserStore for SeaUserStore {
    async fn exists_by_email(&self, email: &str) -> CollaboratorResult<bool> {
        let count = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(db_failure)?;

        Ok(count > 0)
    }

    async fn save(&self, user: User) -> CollaboratorResult<User> {
        let role_id = user
            .role()
            .id()
            .ok_or_else(|| CollaboratorError::failure("Role has not been persisted"))?;

        let id = Uuid::new_v4();
        let profile = user.profile();
        let active_model = ActiveModel {
            id: Set(id),
            first_name: Set(profile.first_name.clone()),
            last_name: Set(profile.last_name.clone()),
            email: Set(profile.email.clone()),
            password_hash: Set(user.password_hash().to_string()),
            identity_number: Set(profile.identity_number.clone()),
            phone_number: Set(profile.phone_number.clone()),
            birth_date: Set(profile.birth_date),
            address: Set(profile.address.clone()),
            role_id: Set(role_id),
            base_salary: Set(profile.base_salary),
            created_at: Set(Utc::now()),
        };

        // Single INSERT: either the whole row lands or nothing does.
        active_model.insert(&self.db).await.map_err(insert_failure)?;
        Ok(user.with_id(id))
    }

    async fn find_by_email(&self, email: &str) -> CollaboratorResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .find_also_related(RoleEntity)
            .one(&self.db)
            .await
            .map_err(db_failure)?;

        let Some((model, role_model)) = result else {
            return Ok(None);
        };

        let role_model: role::Model = role_model.ok_or_else(|| {
            CollaboratorError::failure(format!("User {} references a missing role", model.id))
        })?;
        let role = Role::try_from(role_model)
            .map_err(|e| CollaboratorError::failure(format!("Corrupt role row: {}", e)))?;

        let id = model.id;
        model
            .into_domain(role)
            .map(Some)
            .map_err(|e| CollaboratorError::failure(format!("Corrupt user row {}: {}", id, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_insert_error_is_failure() {
        let err = insert_failure(DbErr::Custom("connection closed".to_string()));
        assert!(matches!(err, CollaboratorError::Failure(_)));
    }

    #[test]
    fn test_unique_violation_is_kept_distinct() {
        let detail = r#"duplicate key value violates unique constraint "users_email_key""#;
        let err = classify_insert_failure(
            Some(SqlErr::UniqueConstraintViolation(detail.to_string())),
            DbErr::Custom(detail.to_string()),
        );

        assert_eq!(err, CollaboratorError::UniqueViolation(detail.to_string()));
    }

    #[test]
    fn test_foreign_key_violation_is_failure() {
        let err = classify_insert_failure(
            Some(SqlErr::ForeignKeyConstraintViolation("fk_users_role_id".to_string())),
            DbErr::Custom("fk_users_role_id".to_string()),
        );

        assert!(matches!(err, CollaboratorError::Failure(_)));
    }

    #[test]
    fn test_db_failure_keeps_detail_for_logs() {
        let err = db_failure(DbErr::Custom("timeout".to_string()));
        assert!(matches!(err, CollaboratorError::Failure(msg) if msg.contains("timeout")));
    }
}
