//! Restaurant aggregate
//!
//! Contains the Restaurant entity, the list query, and repository interface.

pub mod model;
pub mod query;
pub mod repository;

pub use model::{NewRestaurant, Restaurant, RestaurantChanges};
pub use query::{
    RestaurantPageRequest, RestaurantQuery, RestaurantSortField, SortDirection,
    ALLOWED_PAGE_SIZES,
};
pub use repository::RestaurantRepository;
