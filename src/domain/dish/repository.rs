//! Dish repository interface

use async_trait::async_trait;

use super::model::{Dish, NewDish};
use crate::domain::DomainResult;

#[async_trait]
pub trait DishRepository: Send + Sync {
    /// Look up a dish only within the given restaurant.
    async fn find_by_id_and_restaurant(
        &self,
        restaurant_id: i32,
        dish_id: i32,
    ) -> DomainResult<Option<Dish>>;
    async fn find_for_restaurant(&self, restaurant_id: i32) -> DomainResult<Vec<Dish>>;
    async fn create(&self, restaurant_id: i32, dish: NewDish) -> DomainResult<Dish>;
    async fn delete(&self, dish_id: i32) -> DomainResult<()>;
    /// Returns the number of dishes removed.
    async fn delete_for_restaurant(&self, restaurant_id: i32) -> DomainResult<u64>;
}
