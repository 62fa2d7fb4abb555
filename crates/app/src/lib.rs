//! AIVENTORY application state.
//!
//! Every screen in AIVENTORY owns its state privately and re-seeds its mock
//! data when it is constructed; there is no persistence layer and no
//! cross-screen store sharing. This crate implements those per-screen state
//! machines as plain types:
//!
//! - [`store`] - the inventory item store and its stock mutation operations
//! - [`filter`] - the search/status/category filter projection
//! - [`forms`] - transient form sessions backing the modals
//! - [`receipt`] - receipts and invoices emitted by sell/remove operations
//! - [`notifications`] - the notification center
//! - [`nav`] - consume-once navigation parameters (barcode scan handoff)
//! - [`dashboard`] - the dashboard read model (stat cards, forecast, alerts)
//! - [`prediction`] - the static AI-prediction report
//! - [`auth`] - mock login/registration and settings-screen forms
//! - [`theme`] - the injected semantic-role color palette
//!
//! Control flow is uniform across screens: user input lands in a form,
//! validation produces a typed value or a user-facing error, the store is
//! replaced wholesale, and derived projections are recomputed from scratch.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod confirm;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod forms;
pub mod item;
pub mod nav;
pub mod notifications;
pub mod prediction;
pub mod receipt;
pub mod store;
pub mod theme;

pub use confirm::Confirmation;
pub use error::{Alert, AppError};
pub use item::InventoryItem;
pub use store::ItemStore;
