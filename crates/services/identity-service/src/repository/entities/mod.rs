//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod role;
pub mod user;

pub use role::{Entity as RoleEntity, Model as RoleModel};
pub use user::{ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel};
