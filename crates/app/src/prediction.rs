//! The AI-prediction screen's read model.
//!
//! Everything here is presentation data with hardcoded values - the
//! depletion date, confidence, and chart series are literals, not the
//! output of any model (no predictive modeling exists in the system). The
//! screen receives its item context from the inventory screen as display
//! strings and falls back to a default item when opened directly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Item context handed from the inventory screen, as display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionContext {
    pub name: String,
    pub sku: String,
    pub stock: String,
    pub threshold: String,
    pub status: String,
}

impl Default for PredictionContext {
    /// The fallback item shown when no context was passed.
    fn default() -> Self {
        Self {
            name: "AA Batteries".to_owned(),
            sku: "BAT-AA-001".to_owned(),
            stock: "45".to_owned(),
            threshold: "50".to_owned(),
            status: "At Risk".to_owned(),
        }
    }
}

impl PredictionContext {
    /// Build the context from optional navigation parameters, falling back
    /// per-field to the default item.
    #[must_use]
    pub fn from_params(
        name: Option<String>,
        sku: Option<String>,
        stock: Option<String>,
        threshold: Option<String>,
        status: Option<String>,
    ) -> Self {
        let fallback = Self::default();
        Self {
            name: name.unwrap_or(fallback.name),
            sku: sku.unwrap_or(fallback.sku),
            stock: stock.unwrap_or(fallback.stock),
            threshold: threshold.unwrap_or(fallback.threshold),
            status: status.unwrap_or(fallback.status),
        }
    }
}

/// The stock-history chart: month labels with three series. `None` entries
/// leave gaps so the projection only covers the tail of the year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockChart {
    /// Month labels, January through December.
    pub labels: Vec<&'static str>,
    /// Historical stock levels.
    pub historical: Vec<Option<u32>>,
    /// Projected depletion curve; starts where history ends.
    pub projected: Vec<Option<u32>>,
    /// Flat reorder-threshold line.
    pub threshold_line: Vec<u32>,
}

/// The prediction alert block under the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionReport {
    /// Days until predicted depletion.
    pub depletion_in_days: u32,
    /// Predicted depletion date.
    pub depletion_date: NaiveDate,
    /// Claimed model confidence, percent.
    pub confidence_pct: u8,
    /// Suggested reorder quantity, units.
    pub suggested_quantity: u32,
    /// The chart content.
    pub chart: StockChart,
}

impl PredictionReport {
    /// The static content the prediction screen always shows.
    #[must_use]
    pub fn mock() -> Self {
        Self {
            depletion_in_days: 7,
            // The hardcoded date the screen displays as "May 20, 2025".
            depletion_date: NaiveDate::from_ymd_opt(2025, 5, 20)
                .unwrap_or(NaiveDate::MIN),
            confidence_pct: 92,
            suggested_quantity: 50,
            chart: StockChart {
                labels: vec![
                    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
                    "Dec",
                ],
                historical: vec![
                    Some(120),
                    Some(110),
                    Some(105),
                    Some(100),
                    Some(95),
                    Some(85),
                    Some(80),
                    Some(75),
                    Some(70),
                    Some(65),
                    Some(55),
                    Some(45),
                ],
                projected: vec![
                    None,
                    None,
                    None,
                    None,
                    None,
                    None,
                    None,
                    None,
                    None,
                    None,
                    Some(55),
                    Some(45),
                ],
                threshold_line: vec![50; 12],
            },
        }
    }

    /// The depletion date formatted the way the screen shows it.
    #[must_use]
    pub fn depletion_date_label(&self) -> String {
        self.depletion_date.format("%B %-d, %Y").to_string()
    }
}
