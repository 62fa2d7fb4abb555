//! The dashboard read model.
//!
//! Stat cards, the demand-forecast series, and the AI alert cards are all
//! static mock content on the dashboard screen; the numbers are literals,
//! not derived from any store. A separate derived roll-up over a real item
//! store exists for callers that want actual counts - the two views are
//! kept apart so mock and derived numbers never mix.

use aiventory_core::{StockLevel, StockStatus};
use serde::{Deserialize, Serialize};

use crate::store::ItemStore;

/// One stat card at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    /// Card heading.
    pub label: String,
    /// Headline number.
    pub value: u32,
    /// Small-print description.
    pub description: String,
}

/// One month in the demand-forecast chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemandPoint {
    /// Month label.
    pub month: &'static str,
    /// Stock on hand.
    pub stock: u32,
    /// Predicted demand.
    pub demand: u32,
}

/// Urgency of an AI alert card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// Red card with a reorder call-to-action.
    Danger,
    /// Amber card with a view call-to-action.
    Warning,
}

/// One AI-powered alert card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiAlert {
    /// Item the alert is about.
    pub item_name: String,
    /// Its SKU, shown in the card meta line.
    pub sku: String,
    /// Claimed model confidence, percent.
    pub confidence_pct: u8,
    /// Alert body ("Predicted to run out in 7 days").
    pub message: String,
    /// Stock shown on the card.
    pub stock: u32,
    /// Threshold shown on the card.
    pub threshold: u32,
    /// Card styling and call-to-action.
    pub severity: AlertSeverity,
}

/// Everything the dashboard screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    /// The four stat cards.
    pub stats: Vec<StatCard>,
    /// Jan-Jul forecast series.
    pub forecast: Vec<DemandPoint>,
    /// The AI alert cards.
    pub alerts: Vec<AiAlert>,
}

impl DashboardSummary {
    /// The static mock content the dashboard seeds on mount.
    #[must_use]
    pub fn mock() -> Self {
        Self {
            stats: vec![
                StatCard {
                    label: "Total Items".to_owned(),
                    value: 125,
                    description: "Motorcycle parts inventory".to_owned(),
                },
                StatCard {
                    label: "Low-Stock Alerts".to_owned(),
                    value: 3,
                    description: "Items below threshold".to_owned(),
                },
                StatCard {
                    label: "Critical Items".to_owned(),
                    value: 1,
                    description: "Urgent reorder needed".to_owned(),
                },
                StatCard {
                    label: "Suppliers".to_owned(),
                    value: 5,
                    description: "Active partnerships".to_owned(),
                },
            ],
            forecast: vec![
                DemandPoint { month: "Jan", stock: 120, demand: 50 },
                DemandPoint { month: "Feb", stock: 110, demand: 50 },
                DemandPoint { month: "Mar", stock: 95, demand: 50 },
                DemandPoint { month: "Apr", stock: 83, demand: 50 },
                DemandPoint { month: "May", stock: 70, demand: 45 },
                DemandPoint { month: "Jun", stock: 60, demand: 30 },
                DemandPoint { month: "Jul", stock: 20, demand: 20 },
            ],
            alerts: vec![
                AiAlert {
                    item_name: "Motorcycle Batteries".to_owned(),
                    sku: "BAT-YTX-001".to_owned(),
                    confidence_pct: 92,
                    message: "Predicted to run out in 7 days".to_owned(),
                    stock: 45,
                    threshold: 50,
                    severity: AlertSeverity::Danger,
                },
                AiAlert {
                    item_name: "Engine Oil (10W-40)".to_owned(),
                    sku: "OIL-10W40-002".to_owned(),
                    confidence_pct: 85,
                    message: "Order placed - expected December 22, 2025".to_owned(),
                    stock: 32,
                    threshold: 30,
                    severity: AlertSeverity::Warning,
                },
            ],
        }
    }
}

/// Vertical scale for the forecast chart: the largest stock or demand
/// value across the series, with a floor of 100 so sparse data does not
/// stretch to fill.
#[must_use]
pub fn forecast_scale_max(points: &[DemandPoint]) -> u32 {
    points
        .iter()
        .map(|p| p.stock.max(p.demand))
        .fold(100, u32::max)
}

/// Derived low-stock counts over a real item store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LowStockRollup {
    /// Items whose stock implies At Risk (below threshold).
    pub below_threshold: usize,
    /// Items whose stock implies Warning.
    pub warnings: usize,
    /// Items at or below half their threshold.
    pub critical: usize,
}

/// Compute the derived roll-up from an actual store.
///
/// Counts use the stock/threshold pair, not the stored badge, so a stale
/// badge does not hide a low item.
#[must_use]
pub fn low_stock_rollup(store: &ItemStore) -> LowStockRollup {
    let mut rollup = LowStockRollup::default();
    for item in store.items() {
        match StockStatus::derive_from(item.stock, item.threshold) {
            StockStatus::AtRisk => rollup.below_threshold += 1,
            StockStatus::Warning => rollup.warnings += 1,
            StockStatus::Good => {}
        }
        if item.stock <= StockLevel::new(item.threshold.get() / 2) {
            rollup.critical += 1;
        }
    }
    rollup
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_matches_screen_literals() {
        let summary = DashboardSummary::mock();
        assert_eq!(summary.stats.len(), 4);
        assert_eq!(summary.stats[0].value, 125);
        assert_eq!(summary.forecast.len(), 7);
        assert_eq!(summary.alerts.len(), 2);
        assert_eq!(summary.alerts[0].confidence_pct, 92);
    }

    #[test]
    fn test_forecast_scale_uses_largest_value() {
        let summary = DashboardSummary::mock();
        assert_eq!(forecast_scale_max(&summary.forecast), 120);
    }

    #[test]
    fn test_forecast_scale_has_floor_of_100() {
        let points = [DemandPoint { month: "Jan", stock: 20, demand: 15 }];
        assert_eq!(forecast_scale_max(&points), 100);
        assert_eq!(forecast_scale_max(&[]), 100);
    }

    #[test]
    fn test_rollup_derives_from_stock_not_badges() {
        let store = ItemStore::seeded();
        let rollup = low_stock_rollup(&store);
        // Batteries (45/50) and Brake Pads (15/20) are below threshold;
        // Engine Oil (32/30) sits in the warning band; nothing is at or
        // below half its threshold.
        assert_eq!(rollup.below_threshold, 2);
        assert_eq!(rollup.warnings, 1);
        assert_eq!(rollup.critical, 0);
    }
}
