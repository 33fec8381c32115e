//! Dishes module — records nested under a restaurant

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
