//! Repository layer - SeaORM implementations of the store contracts.

pub mod entities;
mod role_repository;
mod user_repository;

pub use role_repository::SeaRoleStore;
pub use user_repository::SeaUserStore;
