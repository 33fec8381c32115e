//! Account module — registration, login and the current caller

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
