//! User domain entity and related types.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::role::Role;

/// Personal and employment data supplied at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub identity_number: Option<String>,
    pub phone_number: Option<String>,
    pub birth_date: NaiveDate,
    pub address: String,
    pub base_salary: Decimal,
}

impl UserProfile {
    /// Check the mandatory fields and the salary bound.
    pub fn validate(&self) -> DomainResult<()> {
        require_non_blank(&self.email, "Email")?;
        require_non_blank(&self.first_name, "First name")?;
        require_non_blank(&self.last_name, "Last name")?;
        require_non_blank(&self.address, "Address")?;

        if self.base_salary < Decimal::ZERO {
            return Err(DomainError::validation("Base salary cannot be negative"));
        }

        Ok(())
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

pub(crate) fn require_non_blank(value: &str, field: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{} cannot be empty", field)));
    }
    Ok(())
}

/// User domain entity.
///
/// A user built by registration has no identifier until the store assigns one
/// through [`User::with_id`]. The password field only ever holds a hash.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    id: Option<Uuid>,
    profile: UserProfile,
    password_hash: String,
    role: Role,
}

impl User {
    /// Build an unsaved user from a validated profile, a password hash and its role.
    pub fn new(profile: UserProfile, password_hash: String, role: Role) -> DomainResult<Self> {
        profile.validate()?;
        require_non_blank(&password_hash, "Password hash")?;

        Ok(Self {
            id: None,
            profile,
            password_hash,
            role,
        })
    }

    /// Attach the identifier assigned by storage.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    /// Check if storage has assigned an identifier
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn email(&self) -> &str {
        &self.profile.email
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn full_name(&self) -> String {
        self.profile.full_name()
    }
}

// Don't expose hash in debug output (security)
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("profile", &self.profile)
            .field("password_hash", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}
