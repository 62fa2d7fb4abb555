//! CLI command implementations, one module per screen.

pub mod dashboard;
pub mod inventory;
pub mod notifications;
pub mod prediction;
pub mod scan;

use aiventory_app::AppError;

/// Errors a CLI command can fail with.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// A screen operation was rejected; surfaced as its alert dialog.
    #[error("{0}")]
    App(#[from] AppError),

    /// A command-line argument did not parse.
    #[error("invalid {field}: {message}")]
    InvalidArg {
        /// Which flag.
        field: &'static str,
        /// Why it was rejected.
        message: String,
    },

    /// Reading the confirmation prompt failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Output serialization failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
