//! Dish service
//!
//! Dishes are only reachable through their restaurant, so every operation
//! resolves the parent first through [`NestedResourceResolver`].

use std::borrow::Cow;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;
use validator::{ValidationError, ValidationErrors};

use crate::application::resolver::NestedResourceResolver;
use crate::domain::{Dish, DomainError, DomainResult, NewDish, RepositoryProvider};

#[derive(Clone)]
pub struct DishService {
    repos: Arc<dyn RepositoryProvider>,
    resolver: NestedResourceResolver,
}

impl DishService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        let resolver = NestedResourceResolver::new(repos.clone());
        Self { repos, resolver }
    }

    pub async fn list(&self, restaurant_id: i32) -> DomainResult<Vec<Dish>> {
        let restaurant = self
            .resolver
            .resolve_restaurant(restaurant_id)
            .await?
            .into_result()?;
        self.repos.dishes().find_for_restaurant(restaurant.id).await
    }

    pub async fn get(&self, restaurant_id: i32, dish_id: i32) -> DomainResult<Dish> {
        let (_, dish) = self
            .resolver
            .resolve_dish(restaurant_id, dish_id)
            .await?
            .into_result()?;
        Ok(dish)
    }

    pub async fn create(&self, restaurant_id: i32, dish: NewDish) -> DomainResult<Dish> {
        if dish.price < Decimal::ZERO {
            let mut errors = ValidationErrors::new();
            let mut error = ValidationError::new("range");
            error.message = Some(Cow::from("price must not be negative"));
            errors.add("price", error);
            return Err(DomainError::Validation(errors));
        }

        let restaurant = self
            .resolver
            .resolve_restaurant(restaurant_id)
            .await?
            .into_result()?;
        let created = self.repos.dishes().create(restaurant.id, dish).await?;

        info!(restaurant_id, dish_id = created.id, "Dish created");
        Ok(created)
    }

    pub async fn delete(&self, restaurant_id: i32, dish_id: i32) -> DomainResult<()> {
        let (_, dish) = self
            .resolver
            .resolve_dish(restaurant_id, dish_id)
            .await?
            .into_result()?;
        self.repos.dishes().delete(dish.id).await?;

        info!(restaurant_id, dish_id, "Dish deleted");
        Ok(())
    }

    /// Remove every dish of a restaurant; returns how many were removed.
    pub async fn delete_all(&self, restaurant_id: i32) -> DomainResult<u64> {
        let restaurant = self
            .resolver
            .resolve_restaurant(restaurant_id)
            .await?
            .into_result()?;
        let removed = self
            .repos
            .dishes()
            .delete_for_restaurant(restaurant.id)
            .await?;

        info!(restaurant_id, removed, "Dishes removed");
        Ok(removed)
    }
}
