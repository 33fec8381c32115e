use async_trait::async_trait;

use super::{CreateUserDto, User};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User>;

    async fn get_user_by_email(&self, email: &str) -> DomainResult<Option<User>>;
    async fn get_user_by_id(&self, id: &str) -> DomainResult<Option<User>>;
    async fn email_exists(&self, email: &str) -> DomainResult<bool>;
    async fn count_users(&self) -> DomainResult<u64>;
}
