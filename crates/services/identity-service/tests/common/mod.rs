//! Shared fixtures and in-memory collaborators for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use domain::{
    CollaboratorError, CollaboratorResult, RegisterCommand, Role, RoleStore, User, UserProfile,
    UserStore, ROLE_CLIENT, SEEDED_ROLES,
};

pub const TEST_SECRET: &str = "test-secret-key-that-is-long-enough-for-hs512";

pub fn profile(email: &str) -> UserProfile {
    UserProfile {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        identity_number: Some("1020304050".to_string()),
        phone_number: Some("+57 300 000 0000".to_string()),
        birth_date: NaiveDate::from_ymd_opt(1990, 12, 10).unwrap(),
        address: "12 Analytical St".to_string(),
        base_salary: Decimal::from_str("2500000.00").unwrap(),
    }
}

pub fn register_command(email: &str, role: &str, password: &str) -> RegisterCommand {
    RegisterCommand::new(profile(email), password, role).unwrap()
}

pub fn client_role() -> Role {
    Role::new(Some(3), ROLE_CLIENT).unwrap()
}

pub fn unsaved_user(email: &str, hash: &str) -> User {
    User::new(profile(email), hash.to_string(), client_role()).unwrap()
}

/// A persisted user carrying `hash` as its stored password hash.
pub fn stored_user(email: &str, hash: &str) -> User {
    unsaved_user(email, hash).with_id(Uuid::new_v4())
}

pub fn register_body(email: &str, role: &str, password: &str) -> serde_json::Value {
    serde_json::json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": email,
        "password": password,
        "identity_number": "1020304050",
        "phone_number": null,
        "birth_date": "1990-12-10",
        "address": "12 Analytical St",
        "role_name": role,
        "base_salary": "2500000.00"
    })
}

/// Users kept in memory, keyed by email. Emails are unique like the real table.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn get(&self, email: &str) -> Option<User> {
        self.users.lock().unwrap().get(email).cloned()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn exists_by_email(&self, email: &str) -> CollaboratorResult<bool> {
        Ok(self.users.lock().unwrap().contains_key(email))
    }

    async fn save(&self, user: User) -> CollaboratorResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(user.email()) {
            return Err(CollaboratorError::UniqueViolation(format!(
                "users_email_key: {}",
                user.email()
            )));
        }

        let saved = user.with_id(Uuid::new_v4());
        users.insert(saved.email().to_string(), saved.clone());
        Ok(saved)
    }

    async fn find_by_email(&self, email: &str) -> CollaboratorResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(email).cloned())
    }
}

/// Read-only role catalogue.
pub struct InMemoryRoleStore {
    roles: Vec<Role>,
}

impl InMemoryRoleStore {
    pub fn new(names: &[&str]) -> Self {
        let roles = names
            .iter()
            .enumerate()
            .map(|(i, name)| Role::new(Some(i as i32 + 1), *name).unwrap())
            .collect();
        Self { roles }
    }

    pub fn seeded() -> Self {
        Self::new(SEEDED_ROLES)
    }
}

#[async_trait]
impl RoleStore for InMemoryRoleStore {
    async fn find_by_name(&self, name: &str) -> CollaboratorResult<Option<Role>> {
        Ok(self.roles.iter().find(|r| r.name() == name).cloned())
    }
}
