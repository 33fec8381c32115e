//! Identity module — registration & authentication
//!
//! Contains the `UserService` which orchestrates account use-cases:
//! registration (with uniqueness validation) and login.

pub mod service;

pub use service::{AuthResult, UserService};
