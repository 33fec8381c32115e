//! Restaurant use-cases: paged listing, lookup, and owner-guarded mutation.

pub mod service;

pub use service::RestaurantService;
