//! Product domain model.
//!
//! The product catalog backs line-item display resolution in budget
//! views; inventory management itself lives in the products screens.

use serde::{Deserialize, Serialize};

/// An inventory product, as served by the REST API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
}
