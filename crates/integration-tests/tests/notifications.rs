//! Integration tests for the notification center.

#![allow(clippy::unwrap_used)]

use aiventory_app::notifications::{NotificationCenter, NotificationRecord};
use aiventory_core::NotificationKind;

// =============================================================================
// Seeding and Ordering
// =============================================================================

#[test]
fn test_seeded_center_renders_newest_first() {
    let center = NotificationCenter::seeded();
    assert_eq!(center.len(), 5);

    let titles: Vec<&str> = center
        .records()
        .iter()
        .map(|record| record.title.as_str())
        .collect();
    assert_eq!(
        titles,
        [
            "Low Stock Alert",
            "New Sale",
            "Critical Stock Level",
            "New Supplier Added",
            "Inventory Update"
        ]
    );
}

#[test]
fn test_new_records_prepend() {
    let mut center = NotificationCenter::seeded();
    center.push(NotificationRecord::new(
        1_700_000_000_000,
        "New Sale",
        "3 units of 'Drive Chains' sold",
        "just now",
        NotificationKind::Success,
    ));

    assert_eq!(center.len(), 6);
    assert_eq!(center.records()[0].time_label, "just now");
    assert_eq!(center.records()[1].title, "Low Stock Alert");
}

// =============================================================================
// Clear All
// =============================================================================

#[test]
fn test_clear_all_reaches_zero_from_any_length() {
    // Seeded length.
    let mut center = NotificationCenter::seeded();
    center.clear_all();
    assert_eq!(center.len(), 0);
    assert!(center.is_empty());

    // Already empty: clearing again is a no-op, not an error.
    center.clear_all();
    assert!(center.is_empty());

    // Grown past the seed.
    let mut center = NotificationCenter::seeded();
    for i in 0..20 {
        center.push(NotificationRecord::new(
            1_700_000_000_000 + i,
            "Inventory Update",
            "Stocktake batch processed",
            "just now",
            NotificationKind::Info,
        ));
    }
    assert_eq!(center.len(), 25);
    center.clear_all();
    assert_eq!(center.len(), 0);
}

#[test]
fn test_clearing_is_the_only_bulk_mutation() {
    // No per-item dismissal exists: after a clear, re-seeding is the only
    // way records come back (a fresh screen mount).
    let mut center = NotificationCenter::seeded();
    center.clear_all();
    assert!(center.is_empty());

    let remounted = NotificationCenter::seeded();
    assert_eq!(remounted.len(), 5);
}
