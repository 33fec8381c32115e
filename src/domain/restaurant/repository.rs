//! Restaurant repository interface

use async_trait::async_trait;

use super::model::{NewRestaurant, Restaurant, RestaurantChanges};
use super::query::RestaurantPageRequest;
use crate::domain::DomainResult;

#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Restaurant>>;
    /// One page of restaurants plus the total number matching the filter.
    async fn find_page(&self, request: &RestaurantPageRequest)
        -> DomainResult<(Vec<Restaurant>, u64)>;
    async fn create(&self, created_by_id: &str, restaurant: NewRestaurant)
        -> DomainResult<Restaurant>;
    async fn update(&self, id: i32, changes: RestaurantChanges) -> DomainResult<Restaurant>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
