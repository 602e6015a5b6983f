//! Tests for budget wire shapes: parsing, write payload purity, and
//! draft validation.

#[cfg(test)]
mod tests {
    use crate::budgets::{BudgetDraft, BudgetRecord, BudgetSnapshot, BudgetStatus, LineItem};
    use rust_decimal_macros::dec;

    // ==================== Status Serialization Tests ====================

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&BudgetStatus::Pending).unwrap(),
            "\"PENDIENTE\""
        );
        assert_eq!(
            serde_json::to_string(&BudgetStatus::Cancelled).unwrap(),
            "\"CANCELADO\""
        );
        assert_eq!(
            serde_json::to_string(&BudgetStatus::Done).unwrap(),
            "\"REALIZADO\""
        );
    }

    #[test]
    fn test_status_deserialization() {
        assert_eq!(
            serde_json::from_str::<BudgetStatus>("\"PENDIENTE\"").unwrap(),
            BudgetStatus::Pending
        );
        assert_eq!(
            serde_json::from_str::<BudgetStatus>("\"REALIZADO\"").unwrap(),
            BudgetStatus::Done
        );
        assert!(serde_json::from_str::<BudgetStatus>("\"ARCHIVADO\"").is_err());
    }

    #[test]
    fn test_status_default_is_pending() {
        assert_eq!(BudgetStatus::default(), BudgetStatus::Pending);
    }

    // ==================== Record Parsing Tests ====================

    #[test]
    fn test_record_parses_wire_names() {
        let json = r#"{
            "id": 1,
            "cliente_id": 5,
            "vehiculo_id": null,
            "estado": "PENDIENTE",
            "fecha_creacion": "2024-01-15T10:30:00",
            "fecha_realizado": null,
            "total_estimado": 1500.5,
            "productos": [{"producto_id": 7, "cantidad": 2}]
        }"#;
        let record: BudgetRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.client_id, Some(5));
        assert_eq!(record.vehicle_id, None);
        assert_eq!(record.status, BudgetStatus::Pending);
        assert_eq!(record.estimated_total, dec!(1500.5));
        assert_eq!(record.completed_at, None);
        assert_eq!(record.items.len(), 1);
        assert_eq!(record.items[0].product_id, 7);
        assert_eq!(record.items[0].quantity, 2);
    }

    #[test]
    fn test_record_coerces_stringified_total() {
        // Some backend versions stringify numeric fields
        let json = r#"{
            "id": 2,
            "estado": "REALIZADO",
            "fecha_creacion": "2024-02-01T09:00:00",
            "fecha_realizado": "2024-02-03T17:45:00",
            "total_estimado": "980.00"
        }"#;
        let record: BudgetRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.estimated_total, dec!(980.00));
        assert!(record.completed_at.is_some());
        assert!(record.items.is_empty());
    }

    #[test]
    fn test_snapshot_missing_sections_default_empty() {
        let snapshot: BudgetSnapshot = serde_json::from_str(r#"{"presupuestos": []}"#).unwrap();
        assert!(snapshot.budgets.is_empty());
        assert!(snapshot.clients.is_empty());
        assert!(snapshot.vehicles.is_empty());
        assert!(snapshot.products.is_empty());
    }

    // ==================== Write Payload Purity Tests ====================

    fn sample_draft() -> BudgetDraft {
        BudgetDraft {
            client_id: Some(5),
            vehicle_id: None,
            status: BudgetStatus::Pending,
            estimated_total: dec!(1500.50),
            items: vec![LineItem {
                product_id: 7,
                quantity: 2,
            }],
        }
    }

    #[test]
    fn test_draft_payload_contains_only_flat_fields() {
        let value = serde_json::to_value(sample_draft()).unwrap();
        let obj = value.as_object().unwrap();

        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "cliente_id",
                "estado",
                "productos",
                "total_estimado",
                "vehiculo_id"
            ]
        );

        let item = value["productos"][0].as_object().unwrap();
        let mut item_keys: Vec<&str> = item.keys().map(String::as_str).collect();
        item_keys.sort_unstable();
        assert_eq!(item_keys, vec!["cantidad", "producto_id"]);
    }

    #[test]
    fn test_draft_serializes_explicit_null_references() {
        // An update must be able to clear an assignment
        let value = serde_json::to_value(sample_draft()).unwrap();
        assert!(value["vehiculo_id"].is_null());
        assert_eq!(value["cliente_id"], 5);
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_accepts_zero_total_and_empty_items() {
        let draft = BudgetDraft {
            client_id: None,
            vehicle_id: None,
            status: BudgetStatus::Pending,
            estimated_total: dec!(0),
            items: vec![],
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_total() {
        let mut draft = sample_draft();
        draft.estimated_total = dec!(-1);
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_quantity() {
        let mut draft = sample_draft();
        draft.items[0].quantity = 0;
        assert!(draft.validate().is_err());
    }
}
