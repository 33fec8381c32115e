//! Restaurant service
//!
//! Every mutation follows the same order: resolve the restaurant
//! (not-found), then run the ownership guard (forbidden), then write.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::authorization::{authorize, Caller, ResourceOperation};
use crate::domain::{
    DomainError, DomainResult, NewRestaurant, RepositoryProvider, Restaurant, RestaurantChanges,
    RestaurantQuery,
};
use crate::shared::PaginatedResult;

#[derive(Clone)]
pub struct RestaurantService {
    repos: Arc<dyn RepositoryProvider>,
}

impl RestaurantService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// List restaurants for a query that is validated as a whole first.
    ///
    /// A page past the end is an empty, successful page carrying the real
    /// total.
    pub async fn list(&self, query: RestaurantQuery) -> DomainResult<PaginatedResult<Restaurant>> {
        let request = query.into_page_request()?;
        let (items, total) = self.repos.restaurants().find_page(&request).await?;

        Ok(PaginatedResult::new(
            items,
            total,
            request.pagination.page,
            request.pagination.limit,
        ))
    }

    pub async fn get(&self, id: i32) -> DomainResult<Restaurant> {
        self.find_existing(id).await
    }

    /// Create a restaurant owned by `caller`.
    pub async fn create(&self, caller: &Caller, restaurant: NewRestaurant) -> DomainResult<Restaurant> {
        let created = self
            .repos
            .restaurants()
            .create(&caller.user_id, restaurant)
            .await?;

        info!(
            restaurant_id = created.id,
            user_id = %caller.user_id,
            "Restaurant created"
        );
        Ok(created)
    }

    pub async fn update(
        &self,
        caller: &Caller,
        id: i32,
        changes: RestaurantChanges,
    ) -> DomainResult<Restaurant> {
        let restaurant = self.find_existing(id).await?;
        self.guard(caller, &restaurant, ResourceOperation::Update)?;

        let updated = self.repos.restaurants().update(id, changes).await?;
        info!(restaurant_id = id, user_id = %caller.user_id, "Restaurant updated");
        Ok(updated)
    }

    pub async fn delete(&self, caller: &Caller, id: i32) -> DomainResult<()> {
        let restaurant = self.find_existing(id).await?;
        self.guard(caller, &restaurant, ResourceOperation::Delete)?;

        self.repos.restaurants().delete(id).await?;
        info!(restaurant_id = id, user_id = %caller.user_id, "Restaurant deleted");
        Ok(())
    }

    async fn find_existing(&self, id: i32) -> DomainResult<Restaurant> {
        self.repos
            .restaurants()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Restaurant", "id", id))
    }

    fn guard(
        &self,
        caller: &Caller,
        restaurant: &Restaurant,
        operation: ResourceOperation,
    ) -> DomainResult<()> {
        let decision = authorize(caller, &restaurant.created_by_id, operation);
        decision
            .into_result(&format!("restaurant {}", restaurant.id))
            .inspect_err(|_| {
                warn!(
                    restaurant_id = restaurant.id,
                    user_id = %caller.user_id,
                    ?operation,
                    "Ownership check denied"
                );
            })
    }
}
