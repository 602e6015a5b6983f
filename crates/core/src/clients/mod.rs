//! Clients module - domain model for workshop clients.

mod clients_model;

pub use clients_model::Client;
