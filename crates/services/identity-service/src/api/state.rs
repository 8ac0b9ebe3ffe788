//! Application state - explicit wiring of services and adapters.

use std::sync::Arc;

use common::JwtConfig;

use crate::infra::Database;
use crate::repository::{SeaRoleStore, SeaUserStore};
use crate::security::{Argon2Hasher, JwtTokenIssuer};
use crate::service::{Authenticator, LoginService, Registrar, RegistrationService};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub registration_service: Arc<dyn RegistrationService>,
    pub login_service: Arc<dyn LoginService>,
}

impl AppState {
    /// Create application state with manually injected services.
    pub fn new(
        registration_service: Arc<dyn RegistrationService>,
        login_service: Arc<dyn LoginService>,
    ) -> Self {
        Self {
            registration_service,
            login_service,
        }
    }

    /// Wire the production adapters over one database connection.
    pub fn from_database(database: &Database, jwt: &JwtConfig) -> Self {
        let connection = database.get_connection();
        let users = Arc::new(SeaUserStore::new(connection.clone()));
        let roles = Arc::new(SeaRoleStore::new(connection));
        let hasher = Arc::new(Argon2Hasher::new());
        let issuer = Arc::new(JwtTokenIssuer::from_config(jwt));

        Self::new(
            Arc::new(Registrar::new(users.clone(), roles, hasher.clone())),
            Arc::new(Authenticator::new(users, hasher, issuer)),
        )
    }
}
