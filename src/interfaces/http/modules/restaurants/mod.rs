//! Restaurants module — paged listing and owner-guarded mutations

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
