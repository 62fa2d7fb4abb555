//! The notification center.
//!
//! An independent per-screen collection of alert records, newest first.
//! Records are seeded as static mock data on mount; the only mutation the
//! screen offers is clear-all. The dashboard's low-stock roll-up hints at
//! deriving alerts from the item store, but the two are deliberately not
//! wired together here, matching the screens.

use aiventory_core::{NotificationId, NotificationKind};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One alert record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    /// Unique at creation; derived from the creation timestamp for live
    /// records, small fixed values for seeds.
    pub id: NotificationId,
    /// Short headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Relative time label, free text ("2 hours ago"), not a timestamp.
    pub time_label: String,
    /// Severity/category for styling.
    pub kind: NotificationKind,
}

impl NotificationRecord {
    /// Build a record stamped with a millisecond-timestamp id.
    #[must_use]
    pub fn new(
        created_millis: i64,
        title: impl Into<String>,
        message: impl Into<String>,
        time_label: impl Into<String>,
        kind: NotificationKind,
    ) -> Self {
        Self {
            id: NotificationId::new(created_millis),
            title: title.into(),
            message: message.into(),
            time_label: time_label.into(),
            kind,
        }
    }
}

/// The per-screen notification list, newest first.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    records: Vec<NotificationRecord>,
}

impl NotificationCenter {
    /// An empty center.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// A center seeded with the standard mock records, as on mount.
    #[must_use]
    pub fn seeded() -> Self {
        let rows: [(i64, &str, &str, &str, NotificationKind); 5] = [
            (
                1,
                "Low Stock Alert",
                "Motorcycle Batteries is below threshold (5 remaining)",
                "2 hours ago",
                NotificationKind::Warning,
            ),
            (
                2,
                "New Sale",
                "5 units of 'Engine Oil' sold",
                "5 hours ago",
                NotificationKind::Success,
            ),
            (
                3,
                "Critical Stock Level",
                "Motorcycle Batteries running critically low (3 remaining)",
                "1 day ago",
                NotificationKind::Error,
            ),
            (
                4,
                "New Supplier Added",
                "King Motors Osmena has been added to your supplier list",
                "2 days ago",
                NotificationKind::Success,
            ),
            (
                5,
                "Inventory Update",
                "Monthly stocktake completed successfully",
                "1 week ago",
                NotificationKind::Info,
            ),
        ];

        Self {
            records: rows
                .into_iter()
                .map(|(id, title, message, time_label, kind)| NotificationRecord {
                    id: NotificationId::new(id),
                    title: title.to_owned(),
                    message: message.to_owned(),
                    time_label: time_label.to_owned(),
                    kind,
                })
                .collect(),
        }
    }

    /// Records, newest first.
    #[must_use]
    pub fn records(&self) -> &[NotificationRecord] {
        &self.records
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Prepend a record so the newest renders first.
    pub fn push(&mut self, record: NotificationRecord) {
        self.records.insert(0, record);
    }

    /// The single bulk mutation: drop everything.
    pub fn clear_all(&mut self) {
        let cleared = self.records.len();
        self.records.clear();
        info!(cleared, "Cleared notifications");
    }
}
