use std::borrow::Cow;

use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// Account registration request
///
/// Format rules are declared with `validator`; the cross-field password
/// check is applied by [`RegisterUserDto::field_errors`], and email
/// uniqueness is checked against persisted users by the identity service.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserDto {
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, max = 128, message = "password must be 6–128 characters"))]
    pub password: String,
    pub confirm_password: String,
    #[validate(length(max = 50))]
    pub first_name: Option<String>,
    #[validate(length(max = 50))]
    pub last_name: Option<String>,
    #[validate(length(max = 50))]
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl RegisterUserDto {
    /// All stateless violations: declared rules plus password confirmation.
    pub fn field_errors(&self) -> ValidationErrors {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if self.password != self.confirm_password {
            let mut error = ValidationError::new("must_match");
            error.message = Some(Cow::from("confirm_password must match password"));
            errors.add("confirm_password", error);
        }

        errors
    }
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}
