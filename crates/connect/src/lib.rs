//! Taller Connect - REST transport for the workshop API.
//!
//! This crate provides the HTTP client that implements `taller-core`'s
//! `BudgetStore` trait against the workshop backend, plus typed read
//! helpers for the catalog endpoints.

pub mod client;

// Re-export commonly used types
pub use client::{WorkshopApiClient, DEFAULT_API_URL};
