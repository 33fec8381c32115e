//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use super::dish::DishRepository;
use super::restaurant::RestaurantRepository;
use super::user::UserRepositoryInterface;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let restaurant = repos.restaurants().find_by_id(1).await?;
///     let dish = repos.dishes().find_by_id_and_restaurant(1, 10).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn restaurants(&self) -> &dyn RestaurantRepository;
    fn dishes(&self) -> &dyn DishRepository;
    fn users(&self) -> &dyn UserRepositoryInterface;
}
