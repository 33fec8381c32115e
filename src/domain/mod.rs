pub mod dish;
pub mod repositories;
pub mod restaurant;
pub mod user;

// Re-export commonly used types
pub use dish::{Dish, DishRepository, NewDish};
pub use repositories::{DomainResult, RepositoryProvider};
pub use restaurant::{
    NewRestaurant, Restaurant, RestaurantChanges, RestaurantPageRequest, RestaurantQuery,
    RestaurantRepository, RestaurantSortField, SortDirection,
};
pub use user::{
    CreateUserDto, LoginDto, RegisterUserDto, User, UserRepositoryInterface, UserRole,
};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
