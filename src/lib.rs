//! # Restaurant Directory API
//!
//! REST service for browsing and managing restaurants and their dishes.
//!
//! ## Architecture
//!
//! - **domain**: entities, query validation and repository traits
//! - **application**: services, ownership guard and nested resource resolver
//! - **infrastructure**: SeaORM persistence, JWT and password hashing
//! - **interfaces**: axum HTTP API with Swagger documentation
//! - **shared**: errors, pagination and shutdown coordination

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

#[cfg(test)]
mod test_support;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

pub use interfaces::create_api_router;
