//! Database entities module

pub mod dish;
pub mod restaurant;
pub mod user;

pub use dish::Entity as Dish;
pub use restaurant::Entity as Restaurant;
pub use user::Entity as User;
