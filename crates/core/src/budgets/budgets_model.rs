//! Budget domain models.
//!
//! Two families of shapes live here. The flat shapes (`BudgetRecord`,
//! `BudgetDraft`, `LineItem`) mirror the REST wire format and carry only
//! foreign-key ids and scalars. The view shapes (`BudgetView`,
//! `LineItemView`) add display fields resolved from the catalog snapshot;
//! they are derived data, recomputed on every load, and never sent back
//! to the server.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clients::Client;
use crate::constants::{
    UNASSIGNED_CLIENT_LABEL, UNASSIGNED_VEHICLE_LABEL, UNKNOWN_PRODUCT_LABEL,
};
use crate::errors::{Error, Result, ValidationError};
use crate::products::Product;
use crate::utils::format_utils::format_amount;
use crate::utils::serde_utils::flexible_decimal;
use crate::vehicles::Vehicle;

/// Lifecycle state of a budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BudgetStatus {
    #[default]
    #[serde(rename = "PENDIENTE")]
    Pending,
    #[serde(rename = "CANCELADO")]
    Cancelled,
    #[serde(rename = "REALIZADO")]
    Done,
}

impl BudgetStatus {
    /// The wire/display spelling of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::Pending => "PENDIENTE",
            BudgetStatus::Cancelled => "CANCELADO",
            BudgetStatus::Done => "REALIZADO",
        }
    }
}

/// One product line on a budget, in wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "producto_id")]
    pub product_id: i64,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

/// A budget as served by the REST API: flat foreign keys, no display data.
///
/// `id` and `created_at` are server-assigned and immutable; ids are never
/// reused. `completed_at` is set by the server when the status transitions
/// to `Done` and is never cleared from this side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BudgetRecord {
    pub id: i64,
    #[serde(rename = "cliente_id", default)]
    pub client_id: Option<i64>,
    #[serde(rename = "vehiculo_id", default)]
    pub vehicle_id: Option<i64>,
    #[serde(rename = "estado")]
    pub status: BudgetStatus,
    #[serde(rename = "fecha_creacion")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "fecha_realizado", default)]
    pub completed_at: Option<NaiveDateTime>,
    #[serde(rename = "total_estimado", deserialize_with = "flexible_decimal")]
    pub estimated_total: Decimal,
    #[serde(rename = "productos", default)]
    pub items: Vec<LineItem>,
}

/// The write shape for create and update calls.
///
/// Contains no id, no timestamps, and no display fields; the server
/// assigns the former and the view layer derives the latter. `client_id`
/// and `vehicle_id` serialize as explicit nulls so an update can clear an
/// assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetDraft {
    #[serde(rename = "cliente_id", default)]
    pub client_id: Option<i64>,
    #[serde(rename = "vehiculo_id", default)]
    pub vehicle_id: Option<i64>,
    #[serde(rename = "estado")]
    pub status: BudgetStatus,
    #[serde(rename = "total_estimado")]
    pub estimated_total: Decimal,
    #[serde(rename = "productos", default)]
    pub items: Vec<LineItem>,
}

impl BudgetDraft {
    /// Validates the draft before it is sent to the server.
    pub fn validate(&self) -> Result<()> {
        if self.estimated_total < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Estimated total cannot be negative".to_string(),
            )));
        }
        if self.items.iter().any(|item| item.quantity == 0) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Line item quantity must be positive".to_string(),
            )));
        }
        Ok(())
    }
}

/// Combined snapshot payload from `GET /presupuestos/data`.
///
/// One read of every entity needed to perform the join, taken at a point
/// in time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BudgetSnapshot {
    #[serde(rename = "presupuestos", default)]
    pub budgets: Vec<BudgetRecord>,
    #[serde(rename = "clientes", default)]
    pub clients: Vec<Client>,
    #[serde(rename = "vehiculos", default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(rename = "productos", default)]
    pub products: Vec<Product>,
}

/// One product line with display fields resolved from the catalog.
///
/// `product_name`/`category` are `None` when the referenced product is
/// missing from the snapshot; `product_id` and `quantity` are preserved
/// regardless so the row still round-trips through an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItemView {
    #[serde(rename = "producto_id")]
    pub product_id: i64,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    #[serde(rename = "nombre")]
    pub product_name: Option<String>,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
}

impl LineItemView {
    /// Display name, degrading to the unknown-product label.
    pub fn product_label(&self) -> &str {
        self.product_name
            .as_deref()
            .unwrap_or(UNKNOWN_PRODUCT_LABEL)
    }
}

/// A budget denormalized for display: foreign keys resolved into the
/// referenced entities. `client`/`vehicle` are `None` when unassigned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetView {
    pub id: i64,
    #[serde(rename = "cliente")]
    pub client: Option<Client>,
    #[serde(rename = "vehiculo")]
    pub vehicle: Option<Vehicle>,
    #[serde(rename = "estado")]
    pub status: BudgetStatus,
    #[serde(rename = "fecha_creacion")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "fecha_realizado")]
    pub completed_at: Option<NaiveDateTime>,
    #[serde(rename = "total_estimado")]
    pub estimated_total: Decimal,
    #[serde(rename = "productos")]
    pub items: Vec<LineItemView>,
}

impl BudgetView {
    /// Client display name, or the unassigned label.
    pub fn client_label(&self) -> &str {
        self.client
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or(UNASSIGNED_CLIENT_LABEL)
    }

    /// Vehicle plate, or the unassigned label.
    pub fn vehicle_label(&self) -> &str {
        self.vehicle
            .as_ref()
            .map(|v| v.plate.as_str())
            .unwrap_or(UNASSIGNED_VEHICLE_LABEL)
    }

    /// Estimated total formatted for display, e.g. `"$1,500.50"`.
    pub fn formatted_total(&self) -> String {
        format_amount(self.estimated_total)
    }

    /// Strips the view back down to the flat write shape.
    ///
    /// This is the only path from a displayed row to a request body, so
    /// derived display fields can never leak into a payload.
    pub fn to_draft(&self) -> BudgetDraft {
        BudgetDraft {
            client_id: self.client.as_ref().map(|c| c.id),
            vehicle_id: self.vehicle.as_ref().map(|v| v.id),
            status: self.status,
            estimated_total: self.estimated_total,
            items: self
                .items
                .iter()
                .map(|item| LineItem {
                    product_id: item.product_id,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}
