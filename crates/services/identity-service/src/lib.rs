//! Identity service - user onboarding and authentication.
//!
//! # Architecture Layers
//!
//! - **service**: registration and login orchestrators
//! - **security**: password hashing and token signing adapters
//! - **repository**: SeaORM stores for users and roles
//! - **infra**: database connection and migrations
//! - **api**: HTTP handlers, extractors and routes
//! - **cli** / **commands**: command-line entry points

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod infra;
pub mod repository;
pub mod security;
pub mod service;

pub use api::{create_router, AppState};
pub use config::{ConfigError, IdentityServiceConfig};
pub use service::{Authenticator, LoginService, Registrar, RegistrationService};
