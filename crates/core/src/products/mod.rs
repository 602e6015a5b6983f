//! Products module - domain model for the inventory catalog.

mod products_model;

pub use products_model::Product;
