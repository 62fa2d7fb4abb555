//! The inventory item store and its stock mutation operations.
//!
//! One [`ItemStore`] is owned by one inventory screen instance and re-seeded
//! with mock data on construction. Mutations follow the screen's
//! copy-and-replace discipline: compute the replacement collection, then
//! swap it in wholesale. Nothing is mutated in place through a shared
//! reference.
//!
//! The stock state machine for a single item is `stock ∈ ℕ` with transitions
//! create/edit/sell/remove/scan-add only; every decrementing transition is
//! guarded by a pre-check that rejects the operation rather than clamping.

use aiventory_core::{ItemId, PaymentMethod, PaymentStatus, Quantity, Sku, StockLevel, StockStatus};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::confirm::Confirmation;
use crate::item::{self, InventoryItem};
use crate::nav::ScanRequest;
use crate::receipt::{Customer, Invoice, Receipt};

/// Errors from stock mutations targeting one item.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StockError {
    /// No item with the given id exists in this store.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    /// The requested quantity exceeds what is on hand. The message names the
    /// available amount, as the rejection alert does.
    #[error("Cannot remove more than available stock ({available})")]
    InsufficientStock {
        /// Units actually on hand.
        available: StockLevel,
    },
}

/// Errors from scan-driven operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The scanned barcode matched no item SKU.
    #[error("Item with this barcode does not exist in inventory")]
    SkuNotFound(Sku),

    /// The matched item could not cover the removal.
    #[error(transparent)]
    Stock(#[from] StockError),
}

/// Validated replacement values for an item edit.
///
/// Produced by the edit form's commit; all five fields are present and
/// already parsed. The item's status badge is not part of an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEdit {
    pub name: String,
    pub sku: Sku,
    pub category: String,
    pub stock: StockLevel,
    pub threshold: StockLevel,
}

/// Validated sale parameters from the sell form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleDetails {
    /// Units to sell; bounds-checked against stock by the store.
    pub quantity: Quantity,
    /// Who is buying.
    pub customer: Customer,
    /// How they pay.
    pub payment_method: PaymentMethod,
    /// Whether payment has settled.
    pub payment_status: PaymentStatus,
}

/// What a delete attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    /// Confirmation was declined; the collection is untouched.
    Cancelled,
    /// The item was removed.
    Deleted,
}

/// What a scan request did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The barcode matched an existing item; its stock went up by one.
    StockIncremented {
        /// Matched item's name.
        name: String,
        /// Stock after the increment.
        new_stock: StockLevel,
    },
    /// Nothing matched; a new item was created with scan defaults.
    ItemCreated {
        /// The new item's name.
        name: String,
        /// The new item's SKU (the scanned barcode).
        sku: Sku,
    },
    /// A removal went through against the matched item.
    Removed {
        /// The walk-in invoice for the removal.
        invoice: Invoice,
        /// Stock after the removal.
        new_stock: StockLevel,
    },
}

/// An item whose stored status badge disagrees with what its stock and
/// threshold imply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDrift {
    pub id: ItemId,
    pub name: String,
    /// The badge currently on the item.
    pub stored: StockStatus,
    /// What the stock/threshold pair implies.
    pub derived: StockStatus,
}

/// The per-screen, in-memory inventory store.
///
/// Holds the current set of items and serves as the single source of truth
/// for rendering, filtering, and stock mutation within the screen's
/// lifetime. The distinct-category list for the filter selector is captured
/// once at load time.
#[derive(Debug, Clone)]
pub struct ItemStore {
    items: Vec<InventoryItem>,
    categories: Vec<String>,
    refreshing: bool,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ItemStore {
    /// A store seeded with the standard mock records, as on screen mount.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_items(item::seed_items())
    }

    /// A store over the given items.
    #[must_use]
    pub fn with_items(items: Vec<InventoryItem>) -> Self {
        let mut categories = Vec::new();
        for item in &items {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        Self {
            items,
            categories,
            refreshing: false,
        }
    }

    /// Current items in source order.
    #[must_use]
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Number of items held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct categories captured at load time, in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Look up an item by SKU (exact, case-sensitive).
    #[must_use]
    pub fn find_by_sku(&self, sku: &Sku) -> Option<&InventoryItem> {
        self.items.iter().find(|item| &item.sku == sku)
    }

    /// Replace an item's editable fields with validated form values.
    ///
    /// The status badge is not touched; if the new stock/threshold pair
    /// contradicts it, the drift is logged rather than silently corrected.
    ///
    /// # Errors
    ///
    /// [`StockError::ItemNotFound`] if the id matches nothing.
    pub fn apply_edit(&mut self, id: &ItemId, edit: ItemEdit) -> Result<(), StockError> {
        if self.get(id).is_none() {
            return Err(StockError::ItemNotFound(id.clone()));
        }

        let next = self
            .items
            .iter()
            .map(|existing| {
                if &existing.id == id {
                    InventoryItem {
                        id: existing.id.clone(),
                        name: edit.name.clone(),
                        sku: edit.sku.clone(),
                        category: edit.category.clone(),
                        stock: edit.stock,
                        threshold: edit.threshold,
                        status: existing.status,
                    }
                } else {
                    existing.clone()
                }
            })
            .collect();
        self.items = next;

        info!(item = %id, "Edited item");
        self.warn_on_drift(id);
        Ok(())
    }

    /// Sell a quantity of an item, producing a receipt.
    ///
    /// # Errors
    ///
    /// [`StockError::ItemNotFound`] for an unknown id;
    /// [`StockError::InsufficientStock`] when the quantity exceeds stock
    /// (the pre-check rejects, it never clamps).
    pub fn sell(&mut self, id: &ItemId, sale: SaleDetails) -> Result<Receipt, StockError> {
        let (name, new_stock) = self.decrement(id, sale.quantity)?;
        let receipt = Receipt::for_sale(
            name,
            sale.quantity,
            sale.customer,
            sale.payment_method,
            sale.payment_status,
            Utc::now(),
        );
        info!(item = %id, quantity = %sale.quantity, stock = %new_stock, receipt = %receipt.number, "Sold units");
        self.warn_on_drift(id);
        Ok(receipt)
    }

    /// Remove a quantity of an item, producing a walk-in invoice.
    ///
    /// # Errors
    ///
    /// Same rules as [`Self::sell`].
    pub fn remove_quantity(&mut self, id: &ItemId, quantity: Quantity) -> Result<Invoice, StockError> {
        let (name, new_stock) = self.decrement(id, quantity)?;
        let invoice = Invoice::for_removal(name, quantity, Utc::now());
        info!(item = %id, quantity = %quantity, stock = %new_stock, invoice = %invoice.number, "Removed units");
        self.warn_on_drift(id);
        Ok(invoice)
    }

    /// Delete an item after a confirmation prompt.
    ///
    /// Declining the prompt leaves the collection identical; confirming
    /// removes the item unconditionally.
    ///
    /// # Errors
    ///
    /// [`StockError::ItemNotFound`] if the prompt was confirmed but the id
    /// matches nothing.
    pub fn delete(
        &mut self,
        id: &ItemId,
        confirmation: Confirmation,
    ) -> Result<DeleteOutcome, StockError> {
        if !confirmation.is_confirmed() {
            return Ok(DeleteOutcome::Cancelled);
        }

        if self.get(id).is_none() {
            return Err(StockError::ItemNotFound(id.clone()));
        }

        self.items = self
            .items
            .iter()
            .filter(|item| &item.id != id)
            .cloned()
            .collect();

        info!(item = %id, "Deleted item");
        Ok(DeleteOutcome::Deleted)
    }

    /// Process a scan-driven add or remove.
    ///
    /// Add: a matching SKU gains one unit; an unmatched SKU creates a new
    /// item with scan defaults, appended at the end. Remove: an unmatched
    /// SKU is an error and changes nothing; a match follows the same bounds
    /// rules as [`Self::remove_quantity`].
    ///
    /// # Errors
    ///
    /// [`ScanError::SkuNotFound`] for a removal against an unknown barcode;
    /// [`ScanError::Stock`] when the matched item cannot cover the quantity.
    pub fn scan(&mut self, request: ScanRequest) -> Result<ScanOutcome, ScanError> {
        match request {
            ScanRequest::Add { barcode, item_name } => {
                if let Some(existing) = self.find_by_sku(&barcode) {
                    let id = existing.id.clone();
                    let name = existing.name.clone();
                    let new_stock = existing.stock.saturating_add(Quantity::ONE);
                    self.replace_stock(&id, new_stock);
                    info!(sku = %barcode, stock = %new_stock, "Scan increased stock");
                    self.warn_on_drift(&id);
                    Ok(ScanOutcome::StockIncremented { name, new_stock })
                } else {
                    let id = ItemId::from_timestamp(Utc::now().timestamp_millis());
                    let created = InventoryItem::from_scan(id, item_name, barcode.clone());
                    let name = created.name.clone();

                    let mut next = self.items.clone();
                    next.push(created);
                    self.items = next;

                    info!(sku = %barcode, "Scan created item");
                    Ok(ScanOutcome::ItemCreated { name, sku: barcode })
                }
            }
            ScanRequest::Remove { barcode, quantity } => {
                let Some(existing) = self.find_by_sku(&barcode) else {
                    warn!(sku = %barcode, "Scan removal against unknown barcode");
                    return Err(ScanError::SkuNotFound(barcode));
                };
                let id = existing.id.clone();
                let (name, new_stock) = self.decrement(&id, quantity)?;
                let invoice = Invoice::for_removal(name, quantity, Utc::now());
                info!(sku = %barcode, quantity = %quantity, stock = %new_stock, invoice = %invoice.number, "Scan removed units");
                self.warn_on_drift(&id);
                Ok(ScanOutcome::Removed { invoice, new_stock })
            }
        }
    }

    /// Items whose stored badge disagrees with their stock/threshold pair.
    #[must_use]
    pub fn status_drift(&self) -> Vec<StatusDrift> {
        self.items
            .iter()
            .filter(|item| item.status != item.derived_status())
            .map(|item| StatusDrift {
                id: item.id.clone(),
                name: item.name.clone(),
                stored: item.status,
                derived: item.derived_status(),
            })
            .collect()
    }

    /// Mark the pull-to-refresh spinner active. No data changes; there is
    /// nothing to fetch.
    pub fn begin_refresh(&mut self) {
        self.refreshing = true;
    }

    /// Clear the pull-to-refresh spinner.
    pub fn finish_refresh(&mut self) {
        self.refreshing = false;
    }

    /// Whether a refresh is in flight.
    #[must_use]
    pub const fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Guarded decrement shared by sell, remove, and scan-remove.
    ///
    /// Returns the item's name and the stock after the decrement.
    fn decrement(&mut self, id: &ItemId, quantity: Quantity) -> Result<(String, StockLevel), StockError> {
        let item = self
            .get(id)
            .ok_or_else(|| StockError::ItemNotFound(id.clone()))?;

        let name = item.name.clone();
        let new_stock = item
            .stock
            .checked_sub(quantity)
            .ok_or(StockError::InsufficientStock {
                available: item.stock,
            })?;

        self.replace_stock(id, new_stock);
        Ok((name, new_stock))
    }

    /// Swap in a new collection with one item's stock replaced.
    fn replace_stock(&mut self, id: &ItemId, new_stock: StockLevel) {
        let next = self
            .items
            .iter()
            .map(|existing| {
                if &existing.id == id {
                    InventoryItem {
                        stock: new_stock,
                        ..existing.clone()
                    }
                } else {
                    existing.clone()
                }
            })
            .collect();
        self.items = next;
    }

    /// Log when a mutation leaves an item's badge contradicting its stock.
    /// The badge itself is never rewritten here.
    fn warn_on_drift(&self, id: &ItemId) {
        if let Some(item) = self.get(id) {
            let derived = item.derived_status();
            if item.status != derived {
                warn!(
                    item = %id,
                    stored = %item.status,
                    derived = %derived,
                    "Status badge no longer matches stock level"
                );
            }
        }
    }
}
