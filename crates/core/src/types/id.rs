//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Numeric IDs in
//! AIVENTORY derive from millisecond creation timestamps, so they wrap `i64`.

use serde::{Deserialize, Serialize};

/// Macro to define a type-safe numeric ID wrapper.
///
/// Creates a newtype wrapper around `i64` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_i64()`
/// - `From<i64>` and `Into<i64>` implementations
///
/// # Example
///
/// ```rust
/// # use aiventory_core::define_id;
/// define_id!(AlertId);
/// define_id!(BatchId);
///
/// let alert_id = AlertId::new(1);
/// let batch_id = BatchId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: AlertId = batch_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID from an i64 value.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the underlying i64 value.
            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(NotificationId);
define_id!(SupplierId);

/// Identifier of an inventory item, unique within one item store.
///
/// Seeded items carry small caller-supplied ids (`"1"`..`"5"`); items
/// created through a barcode scan get a millisecond-timestamp id. Either
/// way the id is an opaque string as far as the store is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an item id from any non-empty string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create an item id from a millisecond creation timestamp.
    #[must_use]
    pub fn from_timestamp(millis: i64) -> Self {
        Self(millis.to_string())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    define_id!(TestId);

    #[test]
    fn test_define_id_roundtrip() {
        let id = TestId::new(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(TestId::from(42), id);
        assert_eq!(i64::from(id), 42);
    }

    #[test]
    fn test_define_id_serde_transparent() {
        let id = NotificationId::new(5);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "5");
    }

    #[test]
    fn test_item_id_from_timestamp() {
        let id = ItemId::from_timestamp(1_700_000_000_000);
        assert_eq!(id.as_str(), "1700000000000");
    }

    #[test]
    fn test_item_id_display() {
        let id = ItemId::new("4");
        assert_eq!(format!("{id}"), "4");
    }
}
