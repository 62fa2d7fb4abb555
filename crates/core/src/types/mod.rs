//! Core types for AIVENTORY.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod money;
pub mod quantity;
pub mod sku;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use money::Money;
pub use quantity::{Quantity, QuantityError, StockLevel};
pub use sku::{Sku, SkuError};
pub use status::*;
