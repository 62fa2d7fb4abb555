//! Integration tests for the barcode-scan flow.
//!
//! Exercises the whole handoff: raw navigation parameters arrive in a
//! consume-once slot, parse into a typed request, and run against the
//! store.

#![allow(clippy::unwrap_used)]

use aiventory_app::ItemStore;
use aiventory_app::nav::{ParamSlot, RawScanParams, ScanParamError, ScanRequest};
use aiventory_app::store::{ScanError, ScanOutcome};
use aiventory_core::{Quantity, Sku, StockLevel, StockStatus};

fn add_params(barcode: &str, name: &str) -> RawScanParams {
    RawScanParams {
        scanned_barcode: Some(barcode.to_owned()),
        item_name: Some(name.to_owned()),
        quantity_to_remove: None,
        action: Some("add".to_owned()),
    }
}

fn remove_params(barcode: &str, qty: &str) -> RawScanParams {
    RawScanParams {
        scanned_barcode: Some(barcode.to_owned()),
        item_name: None,
        quantity_to_remove: Some(qty.to_owned()),
        action: Some("remove".to_owned()),
    }
}

// =============================================================================
// Scan Add
// =============================================================================

#[test]
fn test_add_with_matching_sku_increments_by_exactly_one() {
    let mut store = ItemStore::seeded();
    let request = add_params("BAT-YTX-001", "Motorcycle Batteries")
        .into_request()
        .unwrap()
        .unwrap();

    let outcome = store.scan(request).unwrap();
    assert_eq!(
        outcome,
        ScanOutcome::StockIncremented {
            name: "Motorcycle Batteries".to_owned(),
            new_stock: StockLevel::new(46),
        }
    );

    // No duplicate record appears.
    assert_eq!(store.len(), 5);
    let matching = store
        .items()
        .iter()
        .filter(|item| item.sku.as_str() == "BAT-YTX-001")
        .count();
    assert_eq!(matching, 1);
}

#[test]
fn test_add_with_unmatched_sku_creates_one_defaulted_record() {
    let mut store = ItemStore::seeded();
    let request = add_params("AIR-FLT-006", "Air Filters")
        .into_request()
        .unwrap()
        .unwrap();

    let outcome = store.scan(request).unwrap();
    assert!(matches!(outcome, ScanOutcome::ItemCreated { .. }));
    assert_eq!(store.len(), 6);

    let created = store.find_by_sku(&Sku::parse("AIR-FLT-006").unwrap()).unwrap();
    assert_eq!(created.stock, StockLevel::new(1));
    assert_eq!(created.threshold, StockLevel::new(10));
    assert_eq!(created.status, StockStatus::Good);
    assert_eq!(created.category, "Scanned Item");
}

#[test]
fn test_sku_matching_is_exact() {
    let mut store = ItemStore::seeded();
    // Lowercase does not match the seeded uppercase SKU; a new item is
    // created instead of an increment.
    let request = add_params("bat-ytx-001", "Motorcycle Batteries")
        .into_request()
        .unwrap()
        .unwrap();

    let outcome = store.scan(request).unwrap();
    assert!(matches!(outcome, ScanOutcome::ItemCreated { .. }));
    assert_eq!(store.len(), 6);
}

// =============================================================================
// Scan Remove
// =============================================================================

#[test]
fn test_remove_follows_sell_bounds_and_produces_invoice() {
    let mut store = ItemStore::seeded();

    let request = remove_params("BRK-PAD-004", "5").into_request().unwrap().unwrap();
    let outcome = store.scan(request).unwrap();
    let ScanOutcome::Removed { invoice, new_stock } = outcome else {
        panic!("expected a removal outcome");
    };
    assert_eq!(new_stock, StockLevel::new(10));
    assert!(invoice.number.starts_with("INV-"));

    // Overdraw rejected; stock unchanged.
    let request = remove_params("BRK-PAD-004", "99").into_request().unwrap().unwrap();
    let err = store.scan(request).unwrap_err();
    assert!(matches!(err, ScanError::Stock(_)));
    assert_eq!(
        store
            .find_by_sku(&Sku::parse("BRK-PAD-004").unwrap())
            .unwrap()
            .stock,
        StockLevel::new(10)
    );
}

#[test]
fn test_remove_with_unknown_barcode_changes_nothing() {
    let mut store = ItemStore::seeded();
    let snapshot: Vec<String> = store.items().iter().map(|i| i.id.to_string()).collect();

    let request = remove_params("NOPE-000", "1").into_request().unwrap().unwrap();
    let err = store.scan(request).unwrap_err();
    assert!(matches!(err, ScanError::SkuNotFound(_)));

    let after: Vec<String> = store.items().iter().map(|i| i.id.to_string()).collect();
    assert_eq!(snapshot, after);
}

// =============================================================================
// Parameter Handling
// =============================================================================

#[test]
fn test_params_are_consumed_exactly_once() {
    let mut slot = ParamSlot::empty();
    slot.set(add_params("BAT-YTX-001", "Motorcycle Batteries"));

    let mut store = ItemStore::seeded();

    // First render: the request processes.
    let params = slot.take().unwrap();
    let request = params.into_request().unwrap().unwrap();
    store.scan(request).unwrap();
    let stock_after_first = store
        .find_by_sku(&Sku::parse("BAT-YTX-001").unwrap())
        .unwrap()
        .stock;

    // Re-render: the slot is already drained, so nothing reprocesses.
    assert!(slot.take().is_none());
    let stock_after_rerender = store
        .find_by_sku(&Sku::parse("BAT-YTX-001").unwrap())
        .unwrap()
        .stock;
    assert_eq!(stock_after_first, stock_after_rerender);
}

#[test]
fn test_string_encoded_quantities_parse_strictly() {
    for bad in ["0", "-4", "4.5", "lots"] {
        let err = remove_params("BRK-PAD-004", bad).into_request().unwrap_err();
        assert!(
            matches!(err, ScanParamError::InvalidQuantity(_)),
            "expected rejection for {bad:?}"
        );
    }

    let request = remove_params("BRK-PAD-004", " 3 ").into_request().unwrap().unwrap();
    assert_eq!(
        request,
        ScanRequest::Remove {
            barcode: Sku::parse("BRK-PAD-004").unwrap(),
            quantity: Quantity::new(3).unwrap(),
        }
    );
}

#[test]
fn test_unknown_action_is_rejected() {
    let params = RawScanParams {
        scanned_barcode: Some("BAT-YTX-001".to_owned()),
        item_name: Some("Motorcycle Batteries".to_owned()),
        quantity_to_remove: None,
        action: Some("restock".to_owned()),
    };
    assert!(matches!(
        params.into_request(),
        Err(ScanParamError::UnknownAction(_))
    ));
}
