//! Application services - the registration and login use cases.
//!
//! Each service depends only on the collaborator contracts from `domain::ports`,
//! received explicitly at construction.

mod login_service;
mod registration_service;

pub use login_service::{Authenticator, LoginService};
pub use registration_service::{Registrar, RegistrationService};
