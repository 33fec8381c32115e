use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, User, UserRepositoryInterface, UserRole,
};
use crate::infrastructure::database::entities::user;

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_role_to_domain(role: user::UserRole) -> UserRole {
    match role {
        user::UserRole::User => UserRole::User,
        user::UserRole::Manager => UserRole::Manager,
        user::UserRole::Admin => UserRole::Admin,
    }
}

fn domain_role_to_entity(role: UserRole) -> user::UserRole {
    match role {
        UserRole::User => user::UserRole::User,
        UserRole::Manager => user::UserRole::Manager,
        UserRole::Admin => user::UserRole::Admin,
    }
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        role: entity_role_to_domain(model.role),
        first_name: model.first_name,
        last_name: model.last_name,
        nationality: model.nationality,
        date_of_birth: model.date_of_birth,
        created_at: model.created_at,
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepositoryInterface for UserRepository {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        let new_user = user::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            email: Set(dto.email),
            password_hash: Set(dto.password_hash),
            role: Set(domain_role_to_entity(dto.role)),
            first_name: Set(dto.first_name),
            last_name: Set(dto.last_name),
            nationality: Set(dto.nationality),
            date_of_birth: Set(dto.date_of_birth),
            created_at: Set(Utc::now()),
        };

        let model = new_user.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") || e.to_string().contains("duplicate") {
                DomainError::Conflict("Email already exists".to_string())
            } else {
                e.into()
            }
        })?;

        Ok(user_model_to_domain(model))
    }

    async fn get_user_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(model.map(user_model_to_domain))
    }

    async fn get_user_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id).one(&self.db).await?;

        Ok(model.map(user_model_to_domain))
    }

    async fn email_exists(&self, email: &str) -> DomainResult<bool> {
        let count = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn count_users(&self) -> DomainResult<u64> {
        Ok(user::Entity::find().count(&self.db).await?)
    }
}
