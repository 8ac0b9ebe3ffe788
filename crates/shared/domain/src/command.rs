//! Commands accepted by the registration and login use cases.
//!
//! Commands are immutable and validated at construction, so an orchestrator
//! never sees a blank email or a missing password.

use std::fmt;

use crate::error::{DomainError, DomainResult};
use crate::user::{require_non_blank, UserProfile};

/// Request to register a new user under an existing role.
#[derive(Clone)]
pub struct RegisterCommand {
    profile: UserProfile,
    password: String,
    role_name: String,
}

impl RegisterCommand {
    /// Validate and build a registration command.
    ///
    /// The role is referenced by name only; it is resolved during registration.
    pub fn new(
        profile: UserProfile,
        password: impl Into<String>,
        role_name: impl Into<String>,
    ) -> DomainResult<Self> {
        let password = password.into();
        let role_name = role_name.into();

        profile.validate()?;
        require_non_blank(&role_name, "Role name")?;
        if password.is_empty() {
            return Err(DomainError::validation("Password cannot be empty"));
        }

        Ok(Self {
            profile,
            password,
            role_name,
        })
    }

    pub fn email(&self) -> &str {
        &self.profile.email
    }

    pub fn role_name(&self) -> &str {
        &self.role_name
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Split into profile, raw password and role name.
    pub fn into_parts(self) -> (UserProfile, String, String) {
        (self.profile, self.password, self.role_name)
    }
}

impl fmt::Debug for RegisterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterCommand")
            .field("profile", &self.profile)
            .field("password", &"[REDACTED]")
            .field("role_name", &self.role_name)
            .finish()
    }
}

/// Credentials presented at login.
#[derive(Clone)]
pub struct LoginCommand {
    email: String,
    password: String,
}

impl LoginCommand {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> DomainResult<Self> {
        let email = email.into();
        require_non_blank(&email, "Email")?;

        Ok(Self {
            email,
            password: password.into(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Split into email and raw password.
    pub fn into_parts(self) -> (String, String) {
        (self.email, self.password)
    }
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
