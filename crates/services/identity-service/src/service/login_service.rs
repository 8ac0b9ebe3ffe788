//! Login service - verifies credentials and issues session tokens.
//!
//! SECURITY: an unknown email and a wrong password produce the same
//! `InvalidCredentials` error so callers cannot enumerate accounts.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use domain::{DomainError, DomainResult, Hasher, LoginCommand, Token, TokenIssuer, UserStore};

/// Login service trait for dependency injection.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Authenticate and return a session token
    async fn login(&self, command: LoginCommand) -> DomainResult<Token>;
}

/// Concrete implementation of LoginService.
pub struct Authenticator {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn Hasher>,
    issuer: Arc<dyn TokenIssuer>,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserStore>, hasher: Arc<dyn Hasher>, issuer: Arc<dyn TokenIssuer>) -> Self {
        Self {
            users,
            hasher,
            issuer,
        }
    }
}

#[async_trait]
impl LoginService for Authenticator {
    async fn login(&self, command: LoginCommand) -> DomainResult<Token> {
        let (email, password) = command.into_parts();
        info!(email = %email, "Login attempt");

        let Some(user) = self.users.find_by_email(&email).await? else {
            warn!(email = %email, "Login failed: no user with this email");
            return Err(DomainError::InvalidCredentials);
        };

        if !self.hasher.matches(&password, user.password_hash()).await? {
            warn!(email = %email, "Login failed: password mismatch");
            return Err(DomainError::InvalidCredentials);
        }

        let token = Token::new(self.issuer.generate(&user).await?);
        if token.is_empty() {
            return Err(DomainError::collaborator("Token issuer returned an empty token"));
        }

        info!(email = %email, role = %user.role(), "Token issued");
        Ok(token)
    }
}
