use chrono::{DateTime, NaiveDate, Utc};

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    #[default]
    User,
    Manager,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "User",
            UserRole::Manager => "Manager",
            UserRole::Admin => "Admin",
        }
    }

    /// Unknown role names fall back to the least privileged role.
    pub fn parse(s: &str) -> Self {
        match s {
            "Admin" => UserRole::Admin,
            "Manager" => UserRole::Manager,
            _ => UserRole::User,
        }
    }

    /// Whether this role may act on resources owned by other accounts.
    pub fn can_override_ownership(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

/// User model
#[derive(Clone, Debug)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}
