//! Nested resource resolution: restaurant → dish
//!
//! The parent is resolved first; a missing parent stops resolution before
//! any dish lookup. The dish is then looked up only inside the resolved
//! restaurant, so a dish id that belongs to another restaurant is absent.
//! Both misses collapse into one not-found error at the boundary.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Dish, DomainError, DomainResult, RepositoryProvider, Restaurant};

/// Outcome of resolving the parent restaurant
#[derive(Debug, Clone, PartialEq)]
pub enum ParentLookup {
    Found(Restaurant),
    RestaurantMissing { restaurant_id: i32 },
}

impl ParentLookup {
    pub fn into_result(self) -> DomainResult<Restaurant> {
        match self {
            ParentLookup::Found(restaurant) => Ok(restaurant),
            ParentLookup::RestaurantMissing { restaurant_id } => {
                Err(DomainError::not_found("Restaurant", "id", restaurant_id))
            }
        }
    }
}

/// Outcome of resolving a dish within its restaurant
#[derive(Debug, Clone, PartialEq)]
pub enum NestedLookup {
    Found { restaurant: Restaurant, dish: Dish },
    RestaurantMissing { restaurant_id: i32 },
    DishMissing { restaurant_id: i32, dish_id: i32 },
}

impl NestedLookup {
    /// Merge both miss variants into the same not-found error.
    pub fn into_result(self) -> DomainResult<(Restaurant, Dish)> {
        match self {
            NestedLookup::Found { restaurant, dish } => Ok((restaurant, dish)),
            NestedLookup::RestaurantMissing { restaurant_id } => {
                debug!(restaurant_id, "nested lookup stopped at restaurant");
                Err(DomainError::not_found(
                    "Dish",
                    "restaurant_id",
                    restaurant_id,
                ))
            }
            NestedLookup::DishMissing {
                restaurant_id,
                dish_id,
            } => {
                debug!(restaurant_id, dish_id, "dish not found in restaurant");
                Err(DomainError::not_found(
                    "Dish",
                    "restaurant_id",
                    restaurant_id,
                ))
            }
        }
    }
}

#[derive(Clone)]
pub struct NestedResourceResolver {
    repos: Arc<dyn RepositoryProvider>,
}

impl NestedResourceResolver {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn resolve_restaurant(&self, restaurant_id: i32) -> DomainResult<ParentLookup> {
        Ok(match self.repos.restaurants().find_by_id(restaurant_id).await? {
            Some(restaurant) => ParentLookup::Found(restaurant),
            None => ParentLookup::RestaurantMissing { restaurant_id },
        })
    }

    pub async fn resolve_dish(&self, restaurant_id: i32, dish_id: i32) -> DomainResult<NestedLookup> {
        let restaurant = match self.resolve_restaurant(restaurant_id).await? {
            ParentLookup::Found(restaurant) => restaurant,
            ParentLookup::RestaurantMissing { restaurant_id } => {
                return Ok(NestedLookup::RestaurantMissing { restaurant_id });
            }
        };

        Ok(
            match self
                .repos
                .dishes()
                .find_by_id_and_restaurant(restaurant.id, dish_id)
                .await?
            {
                Some(dish) => NestedLookup::Found { restaurant, dish },
                None => NestedLookup::DishMissing {
                    restaurant_id,
                    dish_id,
                },
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_dish, seed_restaurant, seed_user, test_repos};

    #[tokio::test]
    async fn resolves_restaurant_and_dish() {
        let (_db, repos) = test_repos().await;
        let owner = seed_user(&repos, "owner@test.pl").await;
        let restaurant = seed_restaurant(&repos, &owner.id, "Pizzeria").await;
        let dish = seed_dish(&repos, restaurant.id, "Margherita").await;

        let resolver = NestedResourceResolver::new(repos);
        let lookup = resolver.resolve_dish(restaurant.id, dish.id).await.unwrap();
        assert_eq!(
            lookup,
            NestedLookup::Found {
                restaurant,
                dish
            }
        );
    }

    #[tokio::test]
    async fn missing_restaurant_stops_before_dish() {
        let (_db, repos) = test_repos().await;
        let resolver = NestedResourceResolver::new(repos);

        let lookup = resolver.resolve_dish(10, 1).await.unwrap();
        assert_eq!(lookup, NestedLookup::RestaurantMissing { restaurant_id: 10 });
        assert!(matches!(
            lookup.into_result(),
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn missing_dish_in_existing_restaurant() {
        let (_db, repos) = test_repos().await;
        let owner = seed_user(&repos, "owner@test.pl").await;
        let restaurant = seed_restaurant(&repos, &owner.id, "Pizzeria").await;
        seed_dish(&repos, restaurant.id, "Margherita").await;

        let resolver = NestedResourceResolver::new(repos);
        let lookup = resolver.resolve_dish(restaurant.id, 10).await.unwrap();
        assert_eq!(
            lookup,
            NestedLookup::DishMissing {
                restaurant_id: restaurant.id,
                dish_id: 10
            }
        );
    }

    #[tokio::test]
    async fn dish_of_another_restaurant_is_absent() {
        let (_db, repos) = test_repos().await;
        let owner = seed_user(&repos, "owner@test.pl").await;
        let first = seed_restaurant(&repos, &owner.id, "First").await;
        let second = seed_restaurant(&repos, &owner.id, "Second").await;
        let dish = seed_dish(&repos, first.id, "Soup").await;

        let resolver = NestedResourceResolver::new(repos);
        let lookup = resolver.resolve_dish(second.id, dish.id).await.unwrap();
        assert!(matches!(lookup, NestedLookup::DishMissing { .. }));
    }

    #[tokio::test]
    async fn both_misses_surface_as_the_same_error_class() {
        let restaurant_missing = NestedLookup::RestaurantMissing { restaurant_id: 10 }
            .into_result()
            .unwrap_err();
        let dish_missing = NestedLookup::DishMissing {
            restaurant_id: 1,
            dish_id: 10,
        }
        .into_result()
        .unwrap_err();

        assert!(matches!(restaurant_missing, DomainError::NotFound { entity: "Dish", .. }));
        assert!(matches!(dish_missing, DomainError::NotFound { entity: "Dish", .. }));
    }

    #[tokio::test]
    async fn repeated_resolution_is_stable() {
        let (_db, repos) = test_repos().await;
        let owner = seed_user(&repos, "owner@test.pl").await;
        let restaurant = seed_restaurant(&repos, &owner.id, "Pizzeria").await;
        let dish = seed_dish(&repos, restaurant.id, "Margherita").await;
        let resolver = NestedResourceResolver::new(repos);

        for (r, d) in [(restaurant.id, dish.id), (restaurant.id, 99), (99, dish.id)] {
            let first = resolver.resolve_dish(r, d).await.unwrap();
            let second = resolver.resolve_dish(r, d).await.unwrap();
            assert_eq!(first, second);
        }
    }
}
