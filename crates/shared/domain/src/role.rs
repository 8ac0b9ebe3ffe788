//! Role entity.

use std::fmt;

use crate::error::{DomainError, DomainResult};

/// A named role. Roles are owned by storage; the domain only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Role {
    id: Option<i32>,
    name: String,
}

impl Role {
    /// Create a role, rejecting names that are blank after trimming.
    pub fn new(id: Option<i32>, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Role name cannot be empty"));
        }
        Ok(Self { id, name })
    }

    /// Storage identifier, absent for roles that were never persisted
    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ROLE_CLIENT;

    #[test]
    fn test_role_keeps_id_and_name() {
        let role = Role::new(Some(3), ROLE_CLIENT).unwrap();
        assert_eq!(role.id(), Some(3));
        assert_eq!(role.name(), ROLE_CLIENT);
        assert_eq!(role.to_string(), ROLE_CLIENT);
    }

    #[test]
    fn test_role_without_id() {
        let role = Role::new(None, "ROLE_ADMIN").unwrap();
        assert!(role.id().is_none());
    }

    #[test]
    fn test_blank_role_name_rejected() {
        assert!(matches!(Role::new(Some(1), ""), Err(DomainError::Validation(_))));
        assert!(matches!(Role::new(Some(1), "   \t"), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_roles_compare_by_id_and_name() {
        assert_eq!(Role::new(Some(1), "A").unwrap(), Role::new(Some(1), "A").unwrap());
        assert_ne!(Role::new(Some(1), "A").unwrap(), Role::new(Some(2), "A").unwrap());
    }
}
