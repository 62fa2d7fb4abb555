//! Navigation parameter handoff between screens.
//!
//! The scanner screen hands the inventory screen its result through
//! navigation parameters rather than a shared store: a barcode, an optional
//! item name, a string-encoded quantity, and an `add`/`remove` action tag.
//! The inventory screen consumes the parameters exactly once and then
//! clears them so a re-render cannot reprocess the same scan. [`ParamSlot`]
//! models that consume-once contract; [`RawScanParams`] is the untyped
//! parameter bag and [`ScanRequest`] its validated form.

use aiventory_core::{Quantity, QuantityError, Sku, SkuError};
use serde::{Deserialize, Serialize};

/// Errors turning raw navigation parameters into a [`ScanRequest`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanParamError {
    /// The action tag is neither `add` nor `remove`.
    #[error("unknown scan action: {0}")]
    UnknownAction(String),

    /// The quantity parameter did not parse as a positive whole number.
    #[error("Please enter a valid quantity")]
    InvalidQuantity(#[from] QuantityError),

    /// The barcode parameter is not a usable SKU.
    #[error("invalid barcode: {0}")]
    InvalidBarcode(#[from] SkuError),
}

/// The untyped parameter bag as delivered by navigation.
///
/// All fields are optional strings; which combination is present decides
/// whether a request exists at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawScanParams {
    /// The scanned barcode, matched against item SKUs.
    pub scanned_barcode: Option<String>,
    /// Display name for an item created by an unmatched add.
    pub item_name: Option<String>,
    /// String-encoded positive integer for removals.
    pub quantity_to_remove: Option<String>,
    /// `"add"` or `"remove"`.
    pub action: Option<String>,
}

impl RawScanParams {
    /// Validate the bag into a typed request.
    ///
    /// Returns `Ok(None)` when the parameters do not form a complete
    /// request (the screen simply has nothing to process, as when it is
    /// opened directly). Only malformed values are errors.
    ///
    /// # Errors
    ///
    /// [`ScanParamError`] for an unknown action tag, an unparseable
    /// quantity, or an unusable barcode.
    pub fn into_request(self) -> Result<Option<ScanRequest>, ScanParamError> {
        let Some(action) = self.action else {
            return Ok(None);
        };
        let Some(barcode) = self.scanned_barcode else {
            return Ok(None);
        };

        match action.as_str() {
            "add" => {
                let Some(item_name) = self.item_name else {
                    return Ok(None);
                };
                let barcode = Sku::parse(&barcode)?;
                Ok(Some(ScanRequest::Add { barcode, item_name }))
            }
            "remove" => {
                let Some(quantity) = self.quantity_to_remove else {
                    return Ok(None);
                };
                let barcode = Sku::parse(&barcode)?;
                let quantity = Quantity::parse(&quantity)?;
                Ok(Some(ScanRequest::Remove { barcode, quantity }))
            }
            other => Err(ScanParamError::UnknownAction(other.to_owned())),
        }
    }
}

/// A validated scan-driven operation for the item store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanRequest {
    /// Increment the matching item's stock by one, or create a new item
    /// with scan defaults when nothing matches.
    Add {
        /// The scanned barcode.
        barcode: Sku,
        /// Name for the item if one has to be created.
        item_name: String,
    },
    /// Decrement the matching item's stock; an unmatched barcode is an
    /// error.
    Remove {
        /// The scanned barcode.
        barcode: Sku,
        /// Units to remove.
        quantity: Quantity,
    },
}

/// A consume-once parameter slot.
///
/// Navigation delivers a value by [`ParamSlot::set`]; the receiving screen
/// drains it with [`ParamSlot::take`]. A second take yields nothing, which
/// is what makes reprocessing on re-render impossible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSlot<T> {
    value: Option<T>,
}

impl<T> Default for ParamSlot<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T> ParamSlot<T> {
    /// An empty slot.
    #[must_use]
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// Deliver a value, replacing any unconsumed one.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Drain the value; the slot is empty afterwards.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Whether nothing is pending.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}
