//! Registration service - onboards new users.
//!
//! Steps run strictly in order and the first failure short-circuits the rest:
//! email check, role lookup, password hash, insert.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use domain::{
    CollaboratorError, DomainError, DomainResult, Hasher, RegisterCommand, RoleStore, User,
    UserStore,
};

/// Registration service trait for dependency injection.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Register a new user and return it with its storage identifier
    async fn register(&self, command: RegisterCommand) -> DomainResult<User>;
}

/// Concrete implementation of RegistrationService.
pub struct Registrar {
    users: Arc<dyn UserStore>,
    roles: Arc<dyn RoleStore>,
    hasher: Arc<dyn Hasher>,
}

impl Registrar {
    pub fn new(users: Arc<dyn UserStore>, roles: Arc<dyn RoleStore>, hasher: Arc<dyn Hasher>) -> Self {
        Self {
            users,
            roles,
            hasher,
        }
    }
}

#[async_trait]
impl RegistrationService for Registrar {
    async fn register(&self, command: RegisterCommand) -> DomainResult<User> {
        let (profile, password, role_name) = command.into_parts();
        info!(email = %profile.email, "Attempting to register user");

        if self.users.exists_by_email(&profile.email).await? {
            warn!(email = %profile.email, "Registration rejected: email already registered");
            return Err(DomainError::duplicate_email(profile.email));
        }

        let role = match self.roles.find_by_name(&role_name).await? {
            Some(role) => role,
            None => {
                warn!(email = %profile.email, role = %role_name, "Registration rejected: role not found");
                return Err(DomainError::role_not_found(role_name));
            }
        };
        debug!(role = %role, "Role resolved");

        let password_hash = self.hasher.encode(&password).await?;
        if password_hash.trim().is_empty() {
            return Err(DomainError::collaborator("Hasher returned an empty hash"));
        }
        let user = User::new(profile, password_hash, role)?;
        let email = user.email().to_string();

        // The pre-check can race with a concurrent registration; storage decides.
        let saved = self.users.save(user).await.map_err(|err| match err {
            CollaboratorError::UniqueViolation(detail) => {
                warn!(email = %email, %detail, "Registration rejected by unique constraint");
                DomainError::duplicate_email(email.clone())
            }
            other => DomainError::from(other),
        })?;

        let Some(id) = saved.id() else {
            return Err(DomainError::collaborator("User store returned a user without identifier"));
        };

        info!(user_id = %id, email = %saved.email(), "User registered");
        Ok(saved)
    }
}
