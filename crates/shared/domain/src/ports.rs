//! Collaborator contracts consumed by the use cases.
//!
//! Implementations must be safe to share between concurrent requests.

use async_trait::async_trait;

use crate::error::CollaboratorResult;
use crate::role::Role;
use crate::user::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User persistence.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Check whether any user is registered under this email
    async fn exists_by_email(&self, email: &str) -> CollaboratorResult<bool>;

    /// Persist a new user atomically and return it with its identifier.
    ///
    /// A duplicate email must be reported as `CollaboratorError::UniqueViolation`.
    async fn save(&self, user: User) -> CollaboratorResult<User>;

    /// Find a user by email with its role resolved
    async fn find_by_email(&self, email: &str) -> CollaboratorResult<Option<User>>;
}

/// Role lookup.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Find a role by its unique name
    async fn find_by_name(&self, name: &str) -> CollaboratorResult<Option<Role>>;
}

/// One-way, salted password hashing.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Hasher: Send + Sync {
    /// Hash a raw password
    async fn encode(&self, raw: &str) -> CollaboratorResult<String>;

    /// Compare a raw password with a stored hash in constant time
    async fn matches(&self, raw: &str, hash: &str) -> CollaboratorResult<bool>;
}

/// Session token issuance.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Issue a token for an authenticated user
    async fn generate(&self, user: &User) -> CollaboratorResult<String>;
}
