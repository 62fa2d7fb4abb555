//! Inventory screen commands.
//!
//! Every command seeds a fresh store (as the screen does on mount), applies
//! one user action through the same forms and mutations the screen uses,
//! and prints the result.

use std::io::{self, BufRead, Write};

use aiventory_app::filter::{ItemFilter, StatusFilter};
use aiventory_app::forms::{EditForm, FormSession, RemoveForm, SellForm};
use aiventory_app::receipt::{Invoice, Receipt};
use aiventory_app::store::DeleteOutcome;
use aiventory_app::{AppError, Confirmation, InventoryItem, ItemStore};
use aiventory_core::{ItemId, PaymentMethod, PaymentStatus, StockStatus};

use super::CommandError;

/// List items through the filter projection.
pub fn list(
    query: Option<String>,
    status: Option<String>,
    category: Option<String>,
    json: bool,
) -> Result<(), CommandError> {
    let store = ItemStore::seeded();
    let mut filter = ItemFilter::for_store(&store);

    if let Some(query) = query {
        filter.query = query;
    }
    if let Some(status) = status {
        filter.status = parse_status_flag(&status)?;
    }
    if let Some(category) = category {
        if !filter.category.select(&category) {
            return Err(CommandError::InvalidArg {
                field: "category",
                message: format!(
                    "{category:?} is not one of: {}",
                    store.categories().join(", ")
                ),
            });
        }
    }

    let shown = filter.project(store.items());
    if json {
        print_json(&shown)?;
    } else {
        print_items(&shown);
    }
    Ok(())
}

/// Edit an item's fields; unset flags keep the current values.
#[allow(clippy::too_many_arguments)]
pub fn edit(
    id: &str,
    name: Option<String>,
    sku: Option<String>,
    category: Option<String>,
    stock: Option<String>,
    threshold: Option<String>,
    json: bool,
) -> Result<(), CommandError> {
    let mut store = ItemStore::seeded();
    let id = ItemId::new(id);
    let item = require_item(&store, &id)?.clone();

    let mut session = FormSession::<EditForm>::closed();
    let form = session.open(&item);
    if let Some(name) = name {
        form.name = name;
    }
    if let Some(sku) = sku {
        form.sku = sku;
    }
    if let Some(category) = category {
        form.category = category;
    }
    if let Some(stock) = stock {
        form.stock = stock;
    }
    if let Some(threshold) = threshold {
        form.threshold = threshold;
    }

    let edit = session.commit().map_err(AppError::from)?;
    store.apply_edit(&id, edit).map_err(AppError::from)?;

    let updated = require_item(&store, &id)?;
    if json {
        print_json(updated)?;
    } else {
        print_items(&[updated]);
    }
    Ok(())
}

/// Sell units to a customer, producing a receipt.
#[allow(clippy::too_many_arguments)]
pub fn sell(
    id: &str,
    qty: &str,
    customer: String,
    email: String,
    phone: String,
    method: &str,
    status: &str,
    json: bool,
) -> Result<(), CommandError> {
    let method: PaymentMethod = method.parse().map_err(|message| CommandError::InvalidArg {
        field: "method",
        message,
    })?;
    let status: PaymentStatus = status.parse().map_err(|message| CommandError::InvalidArg {
        field: "status",
        message,
    })?;

    let mut store = ItemStore::seeded();
    let id = ItemId::new(id);
    let item = require_item(&store, &id)?.clone();

    let mut session = FormSession::<SellForm>::closed();
    let form = session.open(&item);
    form.quantity = qty.to_owned();
    form.customer_name = customer;
    form.customer_email = email;
    form.customer_phone = phone;
    form.payment_method = method;
    form.payment_status = status;

    let sale = session.commit().map_err(AppError::from)?;
    let quantity = sale.quantity;
    let receipt = store.sell(&id, sale).map_err(AppError::from)?;

    if json {
        print_json(&receipt)?;
    } else {
        print_receipt(&receipt);
        let new_stock = require_item(&store, &id)?.stock;
        print_line(&format!(
            "{quantity} unit(s) sold from {}. New stock: {new_stock}",
            item.name
        ));
    }
    Ok(())
}

/// Remove units, producing a walk-in invoice.
pub fn remove(id: &str, qty: &str, json: bool) -> Result<(), CommandError> {
    let mut store = ItemStore::seeded();
    let id = ItemId::new(id);
    let item = require_item(&store, &id)?.clone();

    let mut session = FormSession::<RemoveForm>::closed();
    session.open(&item).quantity = qty.to_owned();
    let quantity = session.commit().map_err(AppError::from)?;

    let invoice = store.remove_quantity(&id, quantity).map_err(AppError::from)?;

    if json {
        print_json(&invoice)?;
    } else {
        print_invoice(&invoice);
        let new_stock = require_item(&store, &id)?.stock;
        print_line(&format!(
            "{quantity} unit(s) removed from {}. New stock: {new_stock}",
            item.name
        ));
    }
    Ok(())
}

/// Delete an item after a confirmation prompt.
pub fn delete(id: &str, yes: bool) -> Result<(), CommandError> {
    let mut store = ItemStore::seeded();
    let id = ItemId::new(id);
    let item = require_item(&store, &id)?.clone();

    let confirmation = if yes {
        Confirmation::Confirmed
    } else {
        prompt_confirmation(&item.name)?
    };

    match store.delete(&id, confirmation).map_err(AppError::from)? {
        DeleteOutcome::Deleted => print_line(&format!("Deleted \"{}\"", item.name)),
        DeleteOutcome::Cancelled => print_line("Cancelled, nothing deleted"),
    }
    Ok(())
}

/// Two-option prompt matching the screen's destructive-delete dialog.
fn prompt_confirmation(name: &str) -> Result<Confirmation, CommandError> {
    let mut stderr = io::stderr();
    write!(stderr, "Are you sure you want to delete \"{name}\"? [y/N] ")?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    if answer.trim().eq_ignore_ascii_case("y") {
        Ok(Confirmation::Confirmed)
    } else {
        Ok(Confirmation::Cancelled)
    }
}

fn require_item<'a>(store: &'a ItemStore, id: &ItemId) -> Result<&'a InventoryItem, CommandError> {
    store
        .get(id)
        .ok_or_else(|| AppError::from(aiventory_app::store::StockError::ItemNotFound(id.clone())))
        .map_err(CommandError::from)
}

fn parse_status_flag(flag: &str) -> Result<StatusFilter, CommandError> {
    let status: StockStatus = flag.parse().map_err(|message| CommandError::InvalidArg {
        field: "status",
        message,
    })?;
    Ok(match status {
        StockStatus::Good => StatusFilter::Good,
        StockStatus::Warning => StatusFilter::Warning,
        StockStatus::AtRisk => StatusFilter::AtRisk,
    })
}

#[allow(clippy::print_stdout)]
fn print_items(items: &[&InventoryItem]) {
    println!(
        "{:<4} {:<26} {:<16} {:<14} {:>6} {:>10}  {}",
        "ID", "NAME", "SKU", "CATEGORY", "STOCK", "THRESHOLD", "STATUS"
    );
    for item in items {
        println!(
            "{:<4} {:<26} {:<16} {:<14} {:>6} {:>10}  {}",
            item.id, item.name, item.sku, item.category, item.stock, item.threshold, item.status
        );
    }
}

#[allow(clippy::print_stdout)]
fn print_receipt(receipt: &Receipt) {
    println!("Receipt Generated");
    println!("  Receipt ID: {}", receipt.number);
    println!("  Date: {}", receipt.issued_at.format("%Y-%m-%d"));
    println!("  Customer: {}", receipt.customer.name);
    for line in &receipt.items {
        println!("  Item: {} x{}", line.name, line.quantity);
    }
    println!("  Total: {}", receipt.total);
    println!("  Payment: {} ({})", receipt.payment_method, receipt.payment_status);
}

#[allow(clippy::print_stdout)]
fn print_invoice(invoice: &Invoice) {
    println!("Invoice Generated");
    println!("  Invoice ID: {}", invoice.number);
    println!("  Date: {}", invoice.issued_at.format("%Y-%m-%d"));
    println!("  Customer: {}", invoice.customer);
    for line in &invoice.items {
        println!("  Item: {} x{}", line.name, line.quantity);
    }
    println!("  Total: {}", invoice.total);
    println!("  Status: {}", invoice.payment_status);
}

#[allow(clippy::print_stdout)]
fn print_line(line: &str) {
    println!("{line}");
}

#[allow(clippy::print_stdout)]
pub(super) fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CommandError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
