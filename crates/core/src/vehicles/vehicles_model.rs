//! Vehicle domain model.

use serde::{Deserialize, Serialize};

/// A client vehicle, as served by the REST API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    /// Registration plate, e.g. "AB123CD".
    #[serde(rename = "matricula")]
    pub plate: String,
}
