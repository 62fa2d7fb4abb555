//! The dashboard screen.

use aiventory_app::ItemStore;
use aiventory_app::dashboard::{self, DashboardSummary};

use super::CommandError;
use super::inventory::print_json;

/// Print the dashboard read model: the mock stat cards, forecast, and AI
/// alerts, plus the derived low-stock roll-up over a seeded store.
pub fn show(json: bool) -> Result<(), CommandError> {
    let summary = DashboardSummary::mock();
    if json {
        print_json(&summary)?;
        return Ok(());
    }

    print_summary(&summary);

    let store = ItemStore::seeded();
    let rollup = dashboard::low_stock_rollup(&store);
    print_rollup(rollup);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_summary(summary: &DashboardSummary) {
    println!("Dashboard");
    for stat in &summary.stats {
        println!("  {:<18} {:>4}  ({})", stat.label, stat.value, stat.description);
    }

    println!();
    println!("Demand Forecast (stock / demand)");
    let scale = dashboard::forecast_scale_max(&summary.forecast);
    for point in &summary.forecast {
        let stock_bar = bar(point.stock, scale);
        let demand_bar = bar(point.demand, scale);
        println!("  {:<4} {stock_bar:<24} {:>3}", point.month, point.stock);
        println!("       {demand_bar:<24} {:>3}", point.demand);
    }

    println!();
    println!("AI-Powered Alerts");
    for alert in &summary.alerts {
        println!(
            "  [{:?}] {} ({} · {}% confidence)",
            alert.severity, alert.item_name, alert.sku, alert.confidence_pct
        );
        println!("        {}", alert.message);
        println!("        Stock: {} | Threshold: {}", alert.stock, alert.threshold);
    }
}

#[allow(clippy::print_stdout)]
fn print_rollup(rollup: dashboard::LowStockRollup) {
    println!();
    println!("Derived from current store");
    println!("  Below threshold: {}", rollup.below_threshold);
    println!("  Warnings:        {}", rollup.warnings);
    println!("  Critical:        {}", rollup.critical);
}

/// A fixed-width text bar scaled against the chart maximum.
fn bar(value: u32, scale: u32) -> String {
    const WIDTH: u32 = 24;
    let filled = if scale == 0 { 0 } else { value * WIDTH / scale };
    "#".repeat(filled as usize)
}
