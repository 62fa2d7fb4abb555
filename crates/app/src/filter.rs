//! Filter projection over the item store.
//!
//! The inventory list shows a derived subset of the store: a free-text
//! query matched against name, SKU, and category, AND a status selector,
//! AND a category selector. Both selectors are tap-to-cycle. The projection
//! is pure and recomputed from scratch whenever the store or any filter
//! input changes; relative order of the source collection is preserved.

use aiventory_core::StockStatus;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::item::InventoryItem;
use crate::store::ItemStore;

/// The status selector. Cycles `All → At Risk → Warning → Good → All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    AtRisk,
    Warning,
    Good,
}

impl StatusFilter {
    /// The next selector state in cycle order.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::All => Self::AtRisk,
            Self::AtRisk => Self::Warning,
            Self::Warning => Self::Good,
            Self::Good => Self::All,
        }
    }

    /// Whether an item status passes this selector.
    #[must_use]
    pub const fn matches(self, status: StockStatus) -> bool {
        match self {
            Self::All => true,
            Self::AtRisk => matches!(status, StockStatus::AtRisk),
            Self::Warning => matches!(status, StockStatus::Warning),
            Self::Good => matches!(status, StockStatus::Good),
        }
    }

    /// Chip label for the selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::AtRisk => "At Risk",
            Self::Warning => "Warning",
            Self::Good => "Good",
        }
    }
}

/// The category selector: "All" plus the distinct categories present at
/// load time, cycled in first-appearance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySelector {
    options: Vec<String>,
    /// `None` selects everything; `Some(i)` selects `options[i]`.
    selected: Option<usize>,
}

impl CategorySelector {
    /// Build a selector over the categories captured at store load time.
    #[must_use]
    pub fn new(options: &[String]) -> Self {
        Self {
            options: options.to_vec(),
            selected: None,
        }
    }

    /// Advance to the next selector state.
    pub fn cycle(&mut self) {
        self.selected = match self.selected {
            None if self.options.is_empty() => None,
            None => Some(0),
            Some(i) if i + 1 < self.options.len() => Some(i + 1),
            Some(_) => None,
        };
    }

    /// Jump straight to a category instead of cycling to it. Returns
    /// `false` (leaving the selector alone) when the category was not in
    /// the load-time list.
    pub fn select(&mut self, category: &str) -> bool {
        match self.options.iter().position(|option| option == category) {
            Some(i) => {
                self.selected = Some(i);
                true
            }
            None => false,
        }
    }

    /// Reset to "All".
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The selected category, or `None` for "All".
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    /// Chip label for the selector.
    #[must_use]
    pub fn label(&self) -> &str {
        self.selected().unwrap_or("All")
    }

    /// Whether an item category passes this selector.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        self.selected().is_none_or(|selected| selected == category)
    }
}

/// The combined filter inputs for the inventory list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFilter {
    /// Free-text query, matched case-insensitively.
    pub query: String,
    /// Status chip state.
    pub status: StatusFilter,
    /// Category chip state.
    pub category: CategorySelector,
}

impl ItemFilter {
    /// A filter with everything set to "All", over the store's load-time
    /// category list.
    #[must_use]
    pub fn for_store(store: &ItemStore) -> Self {
        Self {
            query: String::new(),
            status: StatusFilter::All,
            category: CategorySelector::new(store.categories()),
        }
    }

    /// Whether one item passes every active filter.
    #[must_use]
    pub fn matches(&self, item: &InventoryItem) -> bool {
        self.matches_query(item)
            && self.status.matches(item.status)
            && self.category.matches(&item.category)
    }

    /// Project the display subset, preserving source order.
    #[must_use]
    pub fn project<'a>(&self, items: &'a [InventoryItem]) -> Vec<&'a InventoryItem> {
        let shown: Vec<&InventoryItem> =
            items.iter().filter(|item| self.matches(item)).collect();
        debug!(
            total = items.len(),
            shown = shown.len(),
            query = %self.query,
            status = self.status.label(),
            category = self.category.label(),
            "Recomputed filter projection"
        );
        shown
    }

    fn matches_query(&self, item: &InventoryItem) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        item.name.to_lowercase().contains(&needle)
            || item.sku.as_str().to_lowercase().contains(&needle)
            || item.category.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_filter_returns_everything_in_order() {
        let store = ItemStore::seeded();
        let filter = ItemFilter::for_store(&store);
        let shown = filter.project(store.items());
        assert_eq!(shown.len(), store.len());
        let ids: Vec<&str> = shown.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_query_matches_name_sku_and_category_case_insensitively() {
        let store = ItemStore::seeded();
        let mut filter = ItemFilter::for_store(&store);

        filter.query = "brake".to_owned();
        let shown = filter.project(store.items());
        // "Brake Pads" by name, "BRK-PAD-004" does not contain "brake",
        // category "Brakes" matches too - same single item either way.
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].name, "Brake Pads");

        filter.query = "ytx".to_owned();
        let shown = filter.project(store.items());
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].sku.as_str(), "BAT-YTX-001");

        filter.query = "LUBRICANTS".to_owned();
        let shown = filter.project(store.items());
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].category, "Lubricants");
    }

    #[test]
    fn test_query_with_no_match_is_empty() {
        let store = ItemStore::seeded();
        let mut filter = ItemFilter::for_store(&store);
        filter.query = "helmet".to_owned();
        assert!(filter.project(store.items()).is_empty());
    }

    #[test]
    fn test_status_filter_cycle_order() {
        let mut filter = StatusFilter::All;
        let mut seen = Vec::new();
        for _ in 0..4 {
            filter = filter.cycled();
            seen.push(filter);
        }
        assert_eq!(
            seen,
            [
                StatusFilter::AtRisk,
                StatusFilter::Warning,
                StatusFilter::Good,
                StatusFilter::All
            ]
        );
    }

    #[test]
    fn test_status_filter_selects_exactly() {
        let store = ItemStore::seeded();
        let mut filter = ItemFilter::for_store(&store);
        filter.status = StatusFilter::AtRisk;
        let shown = filter.project(store.items());
        let names: Vec<&str> = shown.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Motorcycle Batteries", "Brake Pads"]);
    }

    #[test]
    fn test_category_selector_cycles_load_time_options_plus_all() {
        let store = ItemStore::seeded();
        let mut selector = CategorySelector::new(store.categories());
        assert_eq!(selector.label(), "All");

        let mut labels = Vec::new();
        for _ in 0..6 {
            selector.cycle();
            labels.push(selector.label().to_owned());
        }
        assert_eq!(
            labels,
            [
                "Battery",
                "Lubricants",
                "Transmission",
                "Brakes",
                "Electrical",
                "All"
            ]
        );
    }

    #[test]
    fn test_filters_combine_with_and() {
        let store = ItemStore::seeded();
        let mut filter = ItemFilter::for_store(&store);

        // "Motorcycle" matches Batteries and Spark Plugs; At Risk narrows
        // it to the batteries.
        filter.query = "motorcycle".to_owned();
        filter.status = StatusFilter::AtRisk;
        let shown = filter.project(store.items());
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].name, "Motorcycle Batteries");

        // An unsatisfiable combination yields nothing.
        filter.category.cycle(); // Battery
        filter.status = StatusFilter::Good;
        assert!(filter.project(store.items()).is_empty());
    }

    #[test]
    fn test_empty_category_list_cycles_to_all_only() {
        let mut selector = CategorySelector::new(&[]);
        selector.cycle();
        assert_eq!(selector.label(), "All");
        assert!(selector.matches("anything"));
    }
}
