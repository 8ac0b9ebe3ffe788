//! Argon2 implementation of the `Hasher` contract.
//!
//! Hashing is CPU-bound, so both operations run on tokio's blocking pool.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;

use domain::{CollaboratorError, CollaboratorResult, Hasher};

/// Argon2id password hasher producing PHC strings with a random salt.
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }

    fn hash(raw: &str) -> CollaboratorResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(raw.as_bytes(), &salt)
            .map_err(|e| CollaboratorError::failure(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    /// A stored value that is not a PHC string never matches.
    fn verify(raw: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => Self::argon2()
                .verify_password(raw.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored password hash is malformed: {}", e);
                false
            }
        }
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

#[async_trait]
impl Hasher for Argon2Hasher {
    async fn encode(&self, raw: &str) -> CollaboratorResult<String> {
        let raw = raw.to_owned();
        tokio::task::spawn_blocking(move || Self::hash(&raw))
            .await
            .map_err(|e| CollaboratorError::failure(format!("Hashing task failed: {}", e)))?
    }

    async fn matches(&self, raw: &str, hash: &str) -> CollaboratorResult<bool> {
        let raw = raw.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || Self::verify(&raw, &hash))
            .await
            .map_err(|e| CollaboratorError::failure(format!("Verification task failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.encode("SecurePassword123!").await.unwrap();

        assert_ne!(hash, "SecurePassword123!");
        assert!(hash.starts_with("$argon2"));
        assert!(hasher.matches("SecurePassword123!", &hash).await.unwrap());
        assert!(!hasher.matches("WrongPassword123", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_same_password_different_salts() {
        let hasher = Argon2Hasher::new();
        let first = hasher.encode("secret").await.unwrap();
        let second = hasher.encode("secret").await.unwrap();

        // Different salts produce different hashes
        assert_ne!(first, second);
        // But both verify correctly
        assert!(hasher.matches("secret", &first).await.unwrap());
        assert!(hasher.matches("secret", &second).await.unwrap());
    }

    #[tokio::test]
    async fn test_malformed_hash_never_matches() {
        let hasher = Argon2Hasher::new();
        assert!(!hasher.matches("secret", "secret").await.unwrap());
        assert!(!hasher.matches("secret", "").await.unwrap());
    }
}
