//! AIVENTORY Core - Shared types library.
//!
//! This crate provides common types used across all AIVENTORY components:
//! - `app` - Per-screen state machines (item store, filters, forms)
//! - `cli` - Command-line driver for exercising the screens
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no screen state, no logging.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, SKUs, quantities,
//!   stock levels, emails, statuses, and money

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
