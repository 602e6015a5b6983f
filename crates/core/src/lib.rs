//! Taller Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the workshop management
//! application. It is transport-agnostic and defines the store traits that
//! are implemented by the `taller-connect` crate.

pub mod budgets;
pub mod clients;
pub mod constants;
pub mod errors;
pub mod events;
pub mod products;
pub mod utils;
pub mod vehicles;

// Re-export common types from the budgets module
pub use budgets::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
