//! Domain-level errors.
//!
//! These errors represent business rule violations and collaborator failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Errors reported by the registration and login use cases.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed input, rejected before any collaborator is called
    #[error("{0}")]
    Validation(String),

    /// Email is already on record
    #[error("Email {0} is already registered")]
    DuplicateEmail(String),

    /// Requested role name has no matching record
    #[error("Role '{0}' does not exist")]
    RoleNotFound(String),

    /// Unknown email or wrong password. Both causes share this variant.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Unexpected failure of a store, hasher or token issuer
    #[error("Collaborator failure: {0}")]
    Collaborator(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create a duplicate email error
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        DomainError::DuplicateEmail(email.into())
    }

    /// Create a role not found error
    pub fn role_not_found(name: impl Into<String>) -> Self {
        DomainError::RoleNotFound(name.into())
    }

    /// Create a collaborator failure
    pub fn collaborator(msg: impl Into<String>) -> Self {
        DomainError::Collaborator(msg.into())
    }
}

/// Failures surfaced by collaborator implementations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    /// Storage rejected a write because a unique constraint was violated
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    /// Any other failure (connectivity, corrupt data, crashed task)
    #[error("{0}")]
    Failure(String),
}

impl CollaboratorError {
    /// Create a generic collaborator failure
    pub fn failure(msg: impl Into<String>) -> Self {
        CollaboratorError::Failure(msg.into())
    }
}

impl From<CollaboratorError> for DomainError {
    fn from(err: CollaboratorError) -> Self {
        DomainError::Collaborator(err.to_string())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type alias for collaborator calls
pub type CollaboratorResult<T> = Result<T, CollaboratorError>;
