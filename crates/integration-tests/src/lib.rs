//! Integration tests for AIVENTORY.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p aiventory-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `stock_mutations` - sell/remove/edit/delete against the item store
//! - `filter_projection` - the search/status/category projection
//! - `scan_flow` - barcode-scan navigation parameters end to end
//! - `notifications` - the notification center
//! - `form_sessions` - modal form validation and lifecycle
//!
//! Everything runs in-process against freshly seeded state; there is no
//! database or server to start because the system has neither.
