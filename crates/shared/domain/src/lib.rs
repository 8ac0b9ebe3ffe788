//! Domain layer - Core identity entities, commands and collaborator contracts.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Storage, hashing and token signing are reached only through the traits
//! in [`ports`], so the orchestrators never see a concrete technology.

pub mod command;
pub mod constants;
pub mod error;
pub mod ports;
pub mod role;
pub mod token;
pub mod user;

pub use command::{LoginCommand, RegisterCommand};
pub use constants::*;
pub use error::{CollaboratorError, CollaboratorResult, DomainError, DomainResult};
pub use ports::{Hasher, RoleStore, TokenIssuer, UserStore};
pub use role::Role;
pub use token::Token;
pub use user::{User, UserProfile};

#[cfg(any(test, feature = "test-utils"))]
pub use ports::{MockHasher, MockRoleStore, MockTokenIssuer, MockUserStore};
