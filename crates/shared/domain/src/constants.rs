//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Roles
// =============================================================================

/// Administrator role
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// Advisor role, reviews client applications
pub const ROLE_ADVISOR: &str = "ROLE_ADVISOR";

/// Client role, assigned to self-registered users
pub const ROLE_CLIENT: &str = "ROLE_CLIENT";

/// Roles seeded by the initial migration
pub const SEEDED_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_ADVISOR, ROLE_CLIENT];

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Upper bound on JWT token lifetime in hours (one year)
pub const MAX_JWT_EXPIRATION_HOURS: i64 = 24 * 365;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";
