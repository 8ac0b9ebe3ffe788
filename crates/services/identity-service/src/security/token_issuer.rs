//! JWT implementation of the `TokenIssuer` contract.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use common::JwtConfig;
use domain::{CollaboratorError, CollaboratorResult, TokenIssuer, User};

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User email
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<Uuid>,
    pub role: String,
    pub full_name: String,
    pub exp: i64,
    pub iat: i64,
}

/// Issues HS512-signed access tokens.
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    expiration_hours: i64,
}

impl JwtTokenIssuer {
    pub fn new(secret: &[u8], expiration_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            expiration_hours,
        }
    }

    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(config.secret_bytes(), config.expiration_hours)
    }

    fn claims_for(&self, user: &User) -> CollaboratorResult<Claims> {
        let now = Utc::now();
        let expires_at = Duration::try_hours(self.expiration_hours)
            .filter(|lifetime| *lifetime > Duration::zero())
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                CollaboratorError::failure(format!(
                    "Token lifetime of {} hours is out of range",
                    self.expiration_hours
                ))
            })?;

        Ok(Claims {
            sub: user.email().to_string(),
            uid: user.id(),
            role: user.role().name().to_string(),
            full_name: user.full_name(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        })
    }
}

#[async_trait]
impl TokenIssuer for JwtTokenIssuer {
    async fn generate(&self, user: &User) -> CollaboratorResult<String> {
        let claims = self.claims_for(user)?;

        encode(&Header::new(Algorithm::HS512), &claims, &self.encoding_key)
            .map_err(|e| CollaboratorError::failure(format!("Token signing failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use jsonwebtoken::{decode, DecodingKey, Validation};
    use rust_decimal::Decimal;

    use super::*;
    use domain::{Role, UserProfile, ROLE_CLIENT};

    const SECRET: &[u8] = b"test-secret-key-for-testing-only-32chars";

    fn user() -> User {
        let profile = UserProfile {
            first_name: "Larry".to_string(),
            last_name: "Ramirez".to_string(),
            email: "larry@example.com".to_string(),
            identity_number: None,
            phone_number: None,
            birth_date: NaiveDate::from_ymd_opt(1995, 11, 11).unwrap(),
            address: "123 Main St".to_string(),
            base_salary: Decimal::new(5_000_000, 0),
        };
        User::new(profile, "hash".to_string(), Role::new(Some(3), ROLE_CLIENT).unwrap())
            .unwrap()
            .with_id(Uuid::new_v4())
    }

    fn decode_claims(token: &str) -> Claims {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(SECRET),
            &Validation::new(Algorithm::HS512),
        )
        .unwrap()
        .claims
    }

    #[tokio::test]
    async fn test_token_carries_identity_claims() {
        let issuer = JwtTokenIssuer::new(SECRET, 24);
        let user = user();

        let token = issuer.generate(&user).await.unwrap();
        let claims = decode_claims(&token);

        assert_eq!(claims.sub, "larry@example.com");
        assert_eq!(claims.uid, user.id());
        assert_eq!(claims.role, ROLE_CLIENT);
        assert_eq!(claims.full_name, "Larry Ramirez");
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[tokio::test]
    async fn test_token_rejected_with_other_secret() {
        let issuer = JwtTokenIssuer::new(SECRET, 1);
        let token = issuer.generate(&user()).await.unwrap();

        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"another-secret-key-another-secret-key"),
            &Validation::new(Algorithm::HS512),
        );
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_from_config_uses_expiration() {
        let config = JwtConfig {
            secret: String::from_utf8(SECRET.to_vec()).unwrap(),
            expiration_hours: 2,
        };
        let token = JwtTokenIssuer::from_config(&config)
            .generate(&user())
            .await
            .unwrap();

        let claims = decode_claims(&token);
        assert_eq!(claims.exp - claims.iat, 2 * 3600);
    }

    #[tokio::test]
    async fn test_out_of_range_lifetime_is_failure() {
        for hours in [i64::MAX, 3_000_000_000, 0, -5] {
            let issuer = JwtTokenIssuer::new(SECRET, hours);
            let err = issuer.generate(&user()).await.unwrap_err();
            assert!(matches!(err, CollaboratorError::Failure(_)), "hours = {}", hours);
        }
    }
}
