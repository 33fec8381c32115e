pub mod account;
pub mod dishes;
pub mod health;
pub mod restaurants;
