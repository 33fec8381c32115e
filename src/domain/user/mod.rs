//! User aggregate
//!
//! Contains the User entity, request DTOs, and repository interface.

pub mod model;
pub mod repository;

mod dto_create;
mod dto_register;

// Re-export model types
pub use model::{User, UserRole};

// Re-export DTOs
pub use dto_create::CreateUserDto;
pub use dto_register::{LoginDto, RegisterUserDto};

// Re-export repository trait
pub use repository::UserRepositoryInterface;
