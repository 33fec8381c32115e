pub mod authorization;
pub mod dishes;
pub mod identity;
pub mod resolver;
pub mod restaurants;

// Re-export key types for convenience
pub use authorization::{authorize, Caller, Decision, ResourceOperation};
pub use dishes::DishService;
pub use identity::{AuthResult, UserService};
pub use resolver::{NestedLookup, NestedResourceResolver, ParentLookup};
pub use restaurants::RestaurantService;
