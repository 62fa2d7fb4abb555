//! Inventory item records and seed data.

use aiventory_core::{ItemId, Sku, StockLevel, StockStatus};
use serde::{Deserialize, Serialize};

/// Default category assigned to items created through a barcode scan.
pub const SCANNED_ITEM_CATEGORY: &str = "Scanned Item";

/// Default stock for items created through a barcode scan.
pub const SCANNED_ITEM_STOCK: StockLevel = StockLevel::new(1);

/// Default reorder threshold for items created through a barcode scan.
pub const SCANNED_ITEM_THRESHOLD: StockLevel = StockLevel::new(10);

/// A single inventory record.
///
/// `status` is whatever was set at creation or on the last edit; stock
/// mutations deliberately leave it alone (see [`crate::store::ItemStore`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Unique identifier within the owning store.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Stock-keeping unit; natural key for barcode lookups.
    pub sku: Sku,
    /// Free-text category.
    pub category: String,
    /// Units on hand.
    pub stock: StockLevel,
    /// Reorder trigger level.
    pub threshold: StockLevel,
    /// Manually-maintained health badge.
    pub status: StockStatus,
}

impl InventoryItem {
    /// The status the current stock/threshold pair implies.
    ///
    /// Not necessarily what [`Self::status`] says - the stored badge is only
    /// rewritten by an explicit edit.
    #[must_use]
    pub const fn derived_status(&self) -> StockStatus {
        StockStatus::derive_from(self.stock, self.threshold)
    }

    /// Create an item from a scanned barcode that matched nothing.
    #[must_use]
    pub fn from_scan(id: ItemId, name: impl Into<String>, sku: Sku) -> Self {
        Self {
            id,
            name: name.into(),
            sku,
            category: SCANNED_ITEM_CATEGORY.to_owned(),
            stock: SCANNED_ITEM_STOCK,
            threshold: SCANNED_ITEM_THRESHOLD,
            status: StockStatus::Good,
        }
    }
}

/// The mock records every inventory screen seeds on mount.
#[must_use]
pub fn seed_items() -> Vec<InventoryItem> {
    let rows: [(&str, &str, &str, &str, u32, u32, StockStatus); 5] = [
        (
            "1",
            "Motorcycle Batteries",
            "BAT-YTX-001",
            "Battery",
            45,
            50,
            StockStatus::AtRisk,
        ),
        (
            "2",
            "Engine Oil (10W-40)",
            "OIL-10W40-002",
            "Lubricants",
            32,
            30,
            StockStatus::Warning,
        ),
        (
            "3",
            "Drive Chains",
            "CHN-520-003",
            "Transmission",
            120,
            50,
            StockStatus::Good,
        ),
        (
            "4",
            "Brake Pads",
            "BRK-PAD-004",
            "Brakes",
            15,
            20,
            StockStatus::AtRisk,
        ),
        (
            "5",
            "Motorcycle Spark Plugs",
            "SPK-NGK-005",
            "Electrical",
            65,
            40,
            StockStatus::Good,
        ),
    ];

    rows.into_iter()
        .filter_map(|(id, name, sku, category, stock, threshold, status)| {
            let sku = Sku::parse(sku).ok()?;
            Some(InventoryItem {
                id: ItemId::new(id),
                name: name.to_owned(),
                sku,
                category: category.to_owned(),
                stock: StockLevel::new(stock),
                threshold: StockLevel::new(threshold),
                status,
            })
        })
        .collect()
}
