//! Transaction records emitted by sell and remove operations.
//!
//! Every successful stock decrement produces a record the user can be shown:
//! a [`Receipt`] for a sale with a known customer, or an [`Invoice`] for a
//! plain removal (attributed to a walk-in customer, paid in cash). No price
//! data exists anywhere in the system, so all monetary fields are zero.

use aiventory_core::{Email, Money, PaymentMethod, PaymentStatus, Quantity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Customer attribution on the walk-in invoices produced by removals.
pub const WALK_IN_CUSTOMER: &str = "Walk-in Customer";

/// A customer captured on the sell form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer display name.
    pub name: String,
    /// Contact email.
    pub email: Email,
    /// Contact phone, free text.
    pub phone: String,
}

/// One line on a receipt or invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name at the time of the transaction.
    pub name: String,
    /// Units sold or removed.
    pub quantity: Quantity,
    /// Unit price; always zero.
    pub price: Money,
}

/// Receipt produced by a sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Stable identity of the record.
    pub id: Uuid,
    /// Display reference, e.g. `RCP-1700000000000`.
    pub number: String,
    /// When the sale went through.
    pub issued_at: DateTime<Utc>,
    /// Who bought.
    pub customer: Customer,
    /// What was sold.
    pub items: Vec<LineItem>,
    /// Sum before tax; always zero.
    pub subtotal: Money,
    /// Tax amount; always zero.
    pub tax: Money,
    /// Grand total; always zero.
    pub total: Money,
    /// How the customer paid.
    pub payment_method: PaymentMethod,
    /// Whether payment has settled.
    pub payment_status: PaymentStatus,
}

impl Receipt {
    /// Build a receipt for a single-line sale.
    #[must_use]
    pub fn for_sale(
        item_name: impl Into<String>,
        quantity: Quantity,
        customer: Customer,
        payment_method: PaymentMethod,
        payment_status: PaymentStatus,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            number: format!("RCP-{}", issued_at.timestamp_millis()),
            issued_at,
            customer,
            items: vec![LineItem {
                name: item_name.into(),
                quantity,
                price: Money::zero(),
            }],
            subtotal: Money::zero(),
            tax: Money::zero(),
            total: Money::zero(),
            payment_method,
            payment_status,
        }
    }
}

/// Invoice produced by a plain stock removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Stable identity of the record.
    pub id: Uuid,
    /// Display reference, e.g. `INV-1700000000000`.
    pub number: String,
    /// When the removal went through.
    pub issued_at: DateTime<Utc>,
    /// Attribution; removals are billed to the walk-in customer.
    pub customer: String,
    /// What was removed.
    pub items: Vec<LineItem>,
    /// Sum before tax; always zero.
    pub subtotal: Money,
    /// Tax amount; always zero.
    pub tax: Money,
    /// Grand total; always zero.
    pub total: Money,
    /// Recorded as paid in cash.
    pub payment_method: PaymentMethod,
    /// Recorded as settled.
    pub payment_status: PaymentStatus,
}

impl Invoice {
    /// Build the walk-in invoice for a removal.
    #[must_use]
    pub fn for_removal(
        item_name: impl Into<String>,
        quantity: Quantity,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            number: format!("INV-{}", issued_at.timestamp_millis()),
            issued_at,
            customer: WALK_IN_CUSTOMER.to_owned(),
            items: vec![LineItem {
                name: item_name.into(),
                quantity,
                price: Money::zero(),
            }],
            subtotal: Money::zero(),
            tax: Money::zero(),
            total: Money::zero(),
            payment_method: PaymentMethod::Cash,
            payment_status: PaymentStatus::Paid,
        }
    }
}
