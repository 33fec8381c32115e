//! Dish aggregate

pub mod model;
pub mod repository;

pub use model::{Dish, NewDish};
pub use repository::DishRepository;
