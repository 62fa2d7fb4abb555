//! The AI-prediction screen.

use aiventory_app::ItemStore;
use aiventory_app::prediction::{PredictionContext, PredictionReport};
use aiventory_core::ItemId;

use super::CommandError;
use super::inventory::print_json;

/// Show the prediction screen for one item.
///
/// With an id, the context comes from the seeded store the way the
/// inventory screen passes it (display strings); without one, the screen's
/// fallback item is shown. The report itself is always the same static
/// content.
pub fn show(id: Option<&str>, json: bool) -> Result<(), CommandError> {
    let context = match id {
        Some(id) => {
            let store = ItemStore::seeded();
            let id = ItemId::new(id);
            store.get(&id).map_or_else(PredictionContext::default, |item| {
                PredictionContext::from_params(
                    Some(item.name.clone()),
                    Some(item.sku.to_string()),
                    Some(item.stock.to_string()),
                    Some(item.threshold.to_string()),
                    Some(item.status.to_string()),
                )
            })
        }
        None => PredictionContext::default(),
    };

    let report = PredictionReport::mock();

    if json {
        print_json(&serde_json::json!({
            "context": context,
            "report": report,
        }))?;
        return Ok(());
    }

    print_report(&context, &report);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_report(context: &PredictionContext, report: &PredictionReport) {
    println!("AI Prediction");
    println!("  Item: {} ({})", context.name, context.sku);
    println!(
        "  Stock: {} units | Threshold: {} units | Status: {}",
        context.stock, context.threshold, context.status
    );
    println!();
    println!(
        "  Predicted to run out in {} days (Depletion: {})",
        report.depletion_in_days,
        report.depletion_date_label()
    );
    println!("  Confidence: {}%", report.confidence_pct);
    println!("  Suggested Qty: {} units", report.suggested_quantity);
    println!();
    println!("  Stock history:");
    for (label, level) in report.chart.labels.iter().zip(&report.chart.historical) {
        if let Some(level) = level {
            println!("    {label}: {level}");
        }
    }
}
