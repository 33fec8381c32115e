//! Account DTOs

use serde::Serialize;
use utoipa::ToSchema;

use crate::application::AuthResult;
use crate::domain::User;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserInfo,
}

impl From<AuthResult> for LoginResponse {
    fn from(auth: AuthResult) -> Self {
        Self {
            token: auth.token,
            token_type: auth.token_type,
            expires_in: auth.expires_in,
            user: UserInfo::from(auth.user),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub role: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role.as_str().to_string(),
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}
