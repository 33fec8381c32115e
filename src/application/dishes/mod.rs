//! Dish use-cases, always resolved through the parent restaurant.

pub mod service;

pub use service::DishService;
