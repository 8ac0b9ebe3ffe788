//! Password hashing and token signing adapters.

mod password_hasher;
mod token_issuer;

pub use password_hasher::Argon2Hasher;
pub use token_issuer::{Claims, JwtTokenIssuer};
