//! Denormalization of flat budget records against the catalog snapshot.
//!
//! This module handles:
//! - Building the id-keyed reference maps from a snapshot
//! - Resolving client/vehicle/product foreign keys into display entities
//!
//! Resolution never fails: an id absent from the snapshot degrades to an
//! unassigned/unknown view rather than an error.

use std::collections::HashMap;

use super::budgets_model::{BudgetRecord, BudgetSnapshot, BudgetView, LineItemView};
use crate::clients::Client;
use crate::products::Product;
use crate::vehicles::Vehicle;

/// Id-keyed lookup tables captured from the last snapshot.
///
/// Kept by the service so single records returned by create/update can be
/// re-denormalized without re-fetching the whole snapshot.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    clients: HashMap<i64, Client>,
    vehicles: HashMap<i64, Vehicle>,
    products: HashMap<i64, Product>,
}

impl ReferenceData {
    pub fn from_snapshot(snapshot: &BudgetSnapshot) -> Self {
        Self {
            clients: snapshot
                .clients
                .iter()
                .map(|c| (c.id, c.clone()))
                .collect(),
            vehicles: snapshot
                .vehicles
                .iter()
                .map(|v| (v.id, v.clone()))
                .collect(),
            products: snapshot
                .products
                .iter()
                .map(|p| (p.id, p.clone()))
                .collect(),
        }
    }

    pub fn client(&self, id: i64) -> Option<&Client> {
        self.clients.get(&id)
    }

    pub fn vehicle(&self, id: i64) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    pub fn product(&self, id: i64) -> Option<&Product> {
        self.products.get(&id)
    }
}

/// Resolve a flat record into its display view.
///
/// Display fields are recomputed from `refs` on every call; historical
/// line items always show the catalog's current product name.
pub fn denormalize(record: &BudgetRecord, refs: &ReferenceData) -> BudgetView {
    let items = record
        .items
        .iter()
        .map(|item| {
            let product = refs.product(item.product_id);
            LineItemView {
                product_id: item.product_id,
                quantity: item.quantity,
                product_name: product.map(|p| p.name.clone()),
                category: product.map(|p| p.category.clone()),
            }
        })
        .collect();

    BudgetView {
        id: record.id,
        client: record.client_id.and_then(|id| refs.client(id).cloned()),
        vehicle: record.vehicle_id.and_then(|id| refs.vehicle(id).cloned()),
        status: record.status,
        created_at: record.created_at,
        completed_at: record.completed_at,
        estimated_total: record.estimated_total,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budgets::{BudgetStatus, LineItem};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn snapshot() -> BudgetSnapshot {
        BudgetSnapshot {
            budgets: vec![],
            clients: vec![Client {
                id: 5,
                name: "Juan".to_string(),
            }],
            vehicles: vec![Vehicle {
                id: 3,
                plate: "AB123CD".to_string(),
            }],
            products: vec![Product {
                id: 7,
                name: "Filtro de aceite".to_string(),
                category: "Repuestos".to_string(),
            }],
        }
    }

    fn record(client_id: Option<i64>, vehicle_id: Option<i64>, items: Vec<LineItem>) -> BudgetRecord {
        BudgetRecord {
            id: 1,
            client_id,
            vehicle_id,
            status: BudgetStatus::Pending,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            completed_at: None,
            estimated_total: dec!(1500.50),
            items,
        }
    }

    #[test]
    fn test_denormalize_resolves_known_references() {
        let refs = ReferenceData::from_snapshot(&snapshot());
        let view = denormalize(
            &record(
                Some(5),
                Some(3),
                vec![LineItem {
                    product_id: 7,
                    quantity: 2,
                }],
            ),
            &refs,
        );

        assert_eq!(
            view.client,
            Some(Client {
                id: 5,
                name: "Juan".to_string()
            })
        );
        assert_eq!(view.vehicle.as_ref().unwrap().plate, "AB123CD");
        assert_eq!(view.items[0].product_name.as_deref(), Some("Filtro de aceite"));
        assert_eq!(view.items[0].category.as_deref(), Some("Repuestos"));
        assert_eq!(view.formatted_total(), "$1,500.50");
    }

    #[test]
    fn test_denormalize_unassigned_references() {
        let refs = ReferenceData::from_snapshot(&snapshot());
        let view = denormalize(&record(None, None, vec![]), &refs);

        assert!(view.client.is_none());
        assert!(view.vehicle.is_none());
        assert_eq!(view.client_label(), "Sin cliente");
        assert_eq!(view.vehicle_label(), "Sin vehículo");
    }

    #[test]
    fn test_denormalize_dangling_references_degrade() {
        let refs = ReferenceData::from_snapshot(&snapshot());
        let view = denormalize(
            &record(
                Some(99),
                Some(99),
                vec![LineItem {
                    product_id: 99,
                    quantity: 4,
                }],
            ),
            &refs,
        );

        // A dangling foreign key renders as unassigned/unknown, never an error
        assert!(view.client.is_none());
        assert!(view.vehicle.is_none());
        assert_eq!(view.items[0].product_id, 99);
        assert_eq!(view.items[0].quantity, 4);
        assert!(view.items[0].product_name.is_none());
        assert_eq!(view.items[0].product_label(), "Desconocido");
    }
}
