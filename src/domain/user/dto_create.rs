use chrono::NaiveDate;

use super::UserRole;

/// Persistence payload for a new account; the password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}
