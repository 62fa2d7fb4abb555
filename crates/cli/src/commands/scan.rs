//! The barcode-scan flow, end to end.
//!
//! The flags are deliberately the raw navigation parameters: they go into a
//! [`ParamSlot`], get drained exactly once, parse into a typed request, and
//! run against a freshly seeded store - the same path the inventory screen
//! takes when the scanner hands it parameters.

use aiventory_app::nav::{ParamSlot, RawScanParams};
use aiventory_app::store::ScanOutcome;
use aiventory_app::{AppError, ItemStore};

use super::CommandError;
use super::inventory::print_json;

/// Run one scan action against a seeded store.
pub fn run(
    barcode: String,
    name: Option<String>,
    qty: Option<String>,
    action: String,
    json: bool,
) -> Result<(), CommandError> {
    let mut slot = ParamSlot::empty();
    slot.set(RawScanParams {
        scanned_barcode: Some(barcode),
        item_name: name,
        quantity_to_remove: qty,
        action: Some(action),
    });

    // Drain the slot once; a second take would find nothing, which is what
    // prevents reprocessing on the screen.
    let Some(params) = slot.take() else {
        return Ok(());
    };
    let Some(request) = params.into_request().map_err(AppError::from)? else {
        print_line("Nothing to process: scan parameters are incomplete");
        return Ok(());
    };

    let mut store = ItemStore::seeded();
    let outcome = store.scan(request).map_err(AppError::from)?;

    match outcome {
        ScanOutcome::StockIncremented { name, new_stock } => {
            print_line(&format!("Stock for {name} increased to {new_stock}"));
        }
        ScanOutcome::ItemCreated { name, sku } => {
            print_line(&format!("{name} ({sku}) has been added to inventory"));
        }
        ScanOutcome::Removed { invoice, new_stock } => {
            if json {
                print_json(&invoice)?;
            } else {
                print_line(&format!(
                    "Removed {} unit(s), invoice {}. New stock: {new_stock}",
                    invoice.items.first().map_or(0, |line| line.quantity.get()),
                    invoice.number
                ));
            }
        }
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_line(line: &str) {
    println!("{line}");
}
