//! Request and response bodies of the users API.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use domain::{DomainResult, LoginCommand, RegisterCommand, Token, UserProfile, TOKEN_TYPE_BEARER};

pub const REGISTRATION_SUCCESS_MESSAGE: &str = "User registered successfully.";

/// User registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub identity_number: Option<String>,
    pub phone_number: Option<String>,
    pub birth_date: NaiveDate,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "Role name is required"))]
    pub role_name: String,
    #[validate(custom(function = "non_negative"))]
    pub base_salary: Decimal,
}

impl RegisterRequest {
    /// Build the domain command; blank-after-trim values are rejected here.
    pub fn into_command(self) -> DomainResult<RegisterCommand> {
        let profile = UserProfile {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            identity_number: self.identity_number,
            phone_number: self.phone_number,
            birth_date: self.birth_date,
            address: self.address,
            base_salary: self.base_salary,
        };
        RegisterCommand::new(profile, self.password, self.role_name)
    }
}

fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        let mut err = ValidationError::new("range");
        err.message = Some("Base salary cannot be negative".into());
        return Err(err);
    }
    Ok(())
}

/// User login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn into_command(self) -> DomainResult<LoginCommand> {
        LoginCommand::new(self.email, self.password)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationResponse {
    pub email: String,
    pub message: String,
}

impl RegistrationResponse {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            message: REGISTRATION_SUCCESS_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
}

impl From<Token> for LoginResponse {
    fn from(token: Token) -> Self {
        Self {
            token: token.into_inner(),
            token_type: TOKEN_TYPE_BEARER.to_string(),
        }
    }
}
