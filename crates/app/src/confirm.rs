//! Two-option confirmation prompts.

use serde::{Deserialize, Serialize};

/// Outcome of a cancel/confirm prompt guarding a destructive action.
///
/// Deleting an item and logging out both present this prompt; the
/// destructive branch runs only on [`Confirmation::Confirmed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confirmation {
    /// The user backed out; nothing changes.
    Cancelled,
    /// The user accepted the destructive option.
    Confirmed,
}

impl Confirmation {
    /// Whether the destructive branch should run.
    #[must_use]
    pub const fn is_confirmed(self) -> bool {
        matches!(self, Self::Confirmed)
    }
}
