//! Unified error handling for screen operations.
//!
//! Every failure in this system is a user-input validation failure,
//! surfaced synchronously as a blocking alert dialog; the failed operation
//! aborts and state is left unchanged. `AppError` unifies the per-module
//! error types, and [`AppError::alert`] maps each to the dialog the user
//! sees.

use thiserror::Error;

use crate::forms::FormError;
use crate::nav::ScanParamError;
use crate::store::{ScanError, StockError};

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// A stock mutation was rejected.
    #[error("stock error: {0}")]
    Stock(#[from] StockError),

    /// A scan-driven operation was rejected.
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// Navigation parameters were malformed.
    #[error("scan parameter error: {0}")]
    ScanParams(#[from] ScanParamError),

    /// Form validation failed.
    #[error("form error: {0}")]
    Form(#[from] FormError),
}

/// A blocking alert dialog: title plus message, nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Dialog title.
    pub title: &'static str,
    /// Dialog body, already user-facing.
    pub message: String,
}

impl AppError {
    /// The alert dialog this error surfaces as.
    ///
    /// Scan lookups that miss get the "Not Found" title; everything else
    /// is a plain "Error" dialog whose body is the error's display text.
    #[must_use]
    pub fn alert(&self) -> Alert {
        let title = match self {
            Self::Scan(ScanError::SkuNotFound(_)) => "Not Found",
            _ => "Error",
        };
        Alert {
            title,
            message: self.message(),
        }
    }

    /// The inner message without the layer prefix.
    fn message(&self) -> String {
        match self {
            Self::Stock(e) => e.to_string(),
            Self::Scan(e) => e.to_string(),
            Self::ScanParams(e) => e.to_string(),
            Self::Form(e) => e.to_string(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use aiventory_core::{Sku, StockLevel};

    #[test]
    fn test_insufficient_stock_alert_names_available_amount() {
        let err = AppError::from(StockError::InsufficientStock {
            available: StockLevel::new(15),
        });
        let alert = err.alert();
        assert_eq!(alert.title, "Error");
        assert_eq!(alert.message, "Cannot remove more than available stock (15)");
    }

    #[test]
    fn test_unknown_barcode_alert_is_not_found() {
        let err = AppError::from(ScanError::SkuNotFound(Sku::parse("NOPE-000").unwrap()));
        let alert = err.alert();
        assert_eq!(alert.title, "Not Found");
        assert_eq!(
            alert.message,
            "Item with this barcode does not exist in inventory"
        );
    }

    #[test]
    fn test_missing_fields_alert() {
        let alert = AppError::from(FormError::MissingFields).alert();
        assert_eq!(alert.title, "Error");
        assert_eq!(alert.message, "Please fill in all fields");
    }
}
