//! Identity service configuration.

use std::env;

use thiserror::Error;

use common::{DatabaseConfig, JwtConfig, ServerConfig};
use domain::{MAX_JWT_EXPIRATION_HOURS, MIN_JWT_SECRET_LENGTH};

/// Configuration loading errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("JWT_SECRET must be at least {0} characters long")]
    WeakSecret(usize),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Identity service configuration.
#[derive(Debug, Clone)]
pub struct IdentityServiceConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
}

impl IdentityServiceConfig {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::WeakSecret(MIN_JWT_SECRET_LENGTH));
        }

        let server_defaults = ServerConfig::default();
        let database_defaults = DatabaseConfig::default();
        let jwt_defaults = JwtConfig::default();

        let expiration_hours = parse_or(
            &lookup,
            "JWT_EXPIRATION_HOURS",
            jwt_defaults.expiration_hours,
        )?;
        if !(1..=MAX_JWT_EXPIRATION_HOURS).contains(&expiration_hours) {
            return Err(ConfigError::Invalid {
                name: "JWT_EXPIRATION_HOURS",
                value: expiration_hours.to_string(),
            });
        }

        Ok(Self {
            server: ServerConfig {
                host: lookup("IDENTITY_SERVICE_HOST").unwrap_or(server_defaults.host),
                port: parse_or(&lookup, "IDENTITY_SERVICE_PORT", server_defaults.port)?,
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").unwrap_or(database_defaults.url),
                max_connections: parse_or(
                    &lookup,
                    "DATABASE_MAX_CONNECTIONS",
                    database_defaults.max_connections,
                )?,
                min_connections: parse_or(
                    &lookup,
                    "DATABASE_MIN_CONNECTIONS",
                    database_defaults.min_connections,
                )?,
            },
            jwt: JwtConfig {
                secret,
                expiration_hours,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn load(vars: &[(&str, &str)]) -> Result<IdentityServiceConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        IdentityServiceConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_applied() {
        let config = load(&[("JWT_SECRET", SECRET)]).unwrap();

        assert_eq!(config.server.addr(), "0.0.0.0:8080");
        assert_eq!(config.jwt.expiration_hours, 24);
        assert_eq!(config.database.max_connections, 10);
    }

    #[test]
    fn test_overrides_read() {
        let config = load(&[
            ("JWT_SECRET", SECRET),
            ("JWT_EXPIRATION_HOURS", "2"),
            ("IDENTITY_SERVICE_PORT", "9000"),
            ("DATABASE_URL", "postgres://db/identity"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.jwt.expiration_hours, 2);
        assert_eq!(config.database.url, "postgres://db/identity");
    }

    #[test]
    fn test_secret_required_and_long_enough() {
        assert_eq!(load(&[]).unwrap_err(), ConfigError::Missing("JWT_SECRET"));
        assert_eq!(
            load(&[("JWT_SECRET", "short")]).unwrap_err(),
            ConfigError::WeakSecret(MIN_JWT_SECRET_LENGTH)
        );
    }

    #[test]
    fn test_unparsable_port_rejected() {
        let err = load(&[("JWT_SECRET", SECRET), ("IDENTITY_SERVICE_PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "IDENTITY_SERVICE_PORT", .. }));
    }

    #[test]
    fn test_expiration_hours_must_be_positive_and_bounded() {
        for hours in ["0", "-5", "3000000000"] {
            let err = load(&[("JWT_SECRET", SECRET), ("JWT_EXPIRATION_HOURS", hours)]).unwrap_err();
            assert_eq!(
                err,
                ConfigError::Invalid {
                    name: "JWT_EXPIRATION_HOURS",
                    value: hours.to_string(),
                }
            );
        }

        let config = load(&[
            ("JWT_SECRET", SECRET),
            ("JWT_EXPIRATION_HOURS", MAX_JWT_EXPIRATION_HOURS.to_string().as_str()),
        ])
        .unwrap();
        assert_eq!(config.jwt.expiration_hours, MAX_JWT_EXPIRATION_HOURS);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = load(&[("JWT_SECRET", SECRET)]).unwrap();
        assert!(!format!("{:?}", config).contains(SECRET));
    }
}
