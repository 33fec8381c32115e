//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::repositories::RepositoryProvider;
use crate::domain::{DishRepository, RestaurantRepository, UserRepositoryInterface};

use super::dish_repository::SeaOrmDishRepository;
use super::restaurant_repository::SeaOrmRestaurantRepository;
use super::user_repository::UserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let restaurant = repos.restaurants().find_by_id(1).await?;
/// let dish = repos.dishes().find_by_id_and_restaurant(1, 3).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    restaurants: SeaOrmRestaurantRepository,
    dishes: SeaOrmDishRepository,
    users: UserRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            restaurants: SeaOrmRestaurantRepository::new(db.clone()),
            dishes: SeaOrmDishRepository::new(db.clone()),
            users: UserRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn restaurants(&self) -> &dyn RestaurantRepository {
        &self.restaurants
    }

    fn dishes(&self) -> &dyn DishRepository {
        &self.dishes
    }

    fn users(&self) -> &dyn UserRepositoryInterface {
        &self.users
    }
}
