//! Client domain model.
//!
//! Clients are owned by the client management screens; the budget view
//! only references them by id, so this crate carries the read shape only.

use serde::{Deserialize, Serialize};

/// A workshop client, as served by the REST API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
}
