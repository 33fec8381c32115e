//! Account service — application-layer orchestration
//!
//! Registration validates the request as a whole (format, password
//! confirmation and email uniqueness against stored users) before anything
//! is written. Login issues a signed bearer token.

use std::borrow::Cow;
use std::sync::Arc;

use tracing::{info, warn};
use validator::ValidationError;

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, LoginDto, RegisterUserDto, User,
    UserRepositoryInterface, UserRole,
};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password_with_cost, verify_password};

/// Authentication result returned after a successful login
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}

/// User service — registration and login.
///
/// Generic over `R: UserRepositoryInterface` so it stays decoupled from
/// the concrete persistence layer.
pub struct UserService<R: UserRepositoryInterface> {
    repo: Arc<R>,
    jwt_config: JwtConfig,
    bcrypt_cost: u32,
}

impl<R: UserRepositoryInterface> UserService<R> {
    pub fn new(repo: Arc<R>, jwt_config: JwtConfig) -> Self {
        Self {
            repo,
            jwt_config,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    // ── Registration ────────────────────────────────────────────

    /// Register a new account with the `User` role.
    pub async fn register(&self, dto: RegisterUserDto) -> DomainResult<User> {
        let mut errors = dto.field_errors();

        if self.repo.email_exists(&dto.email).await? {
            let mut error = ValidationError::new("unique");
            error.message = Some(Cow::from("email is already taken"));
            errors.add("email", error);
        }

        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        let password_hash = hash_password_with_cost(&dto.password, self.bcrypt_cost)
            .map_err(|e| DomainError::Database(format!("Failed to hash password: {}", e)))?;

        let user = self
            .repo
            .create_user(CreateUserDto {
                email: dto.email,
                password_hash,
                role: UserRole::User,
                first_name: dto.first_name,
                last_name: dto.last_name,
                nationality: dto.nationality,
                date_of_birth: dto.date_of_birth,
            })
            .await?;

        info!(user_id = %user.id, email = %user.email, "New user registered");
        Ok(user)
    }

    // ── Authentication ──────────────────────────────────────────

    /// Authenticate by email + password and return a JWT.
    pub async fn login(&self, dto: LoginDto) -> DomainResult<AuthResult> {
        let Some(user) = self.repo.get_user_by_email(&dto.email).await? else {
            return Err(DomainError::Unauthorized(
                "Invalid username or password".into(),
            ));
        };

        let valid = verify_password(&dto.password, &user.password_hash).unwrap_or(false);
        if !valid {
            warn!(user_id = %user.id, "Rejected login with wrong password");
            return Err(DomainError::Unauthorized(
                "Invalid username or password".into(),
            ));
        }

        let token = create_token(&user.id, &user.email, user.role.as_str(), &self.jwt_config)
            .map_err(|e| DomainError::Database(format!("Failed to create token: {}", e)))?;

        Ok(AuthResult {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expiration_hours * 3600,
            user,
        })
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn get_user_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        self.repo.get_user_by_id(id).await
    }
}
