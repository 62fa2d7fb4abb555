//! AIVENTORY CLI - drives the app's screens from the command line.
//!
//! Each invocation seeds fresh mock data (exactly what a screen does on
//! mount) and applies one user action against it, so runs are independent:
//! there is no persistence between invocations by design.
//!
//! # Usage
//!
//! ```bash
//! # The inventory list through the filter projection
//! aiventory inventory list --query brake --status at-risk
//!
//! # Sell five batteries to a named customer
//! aiventory inventory sell -i 1 -q 5 --customer "Ana Reyes" \
//!     --email ana@example.com --phone "0917 555 0199"
//!
//! # The barcode-scan flow (navigation parameters end to end)
//! aiventory scan --barcode BRK-PAD-004 --action remove --qty 3
//!
//! # Read models
//! aiventory dashboard
//! aiventory prediction --id 4
//! aiventory notifications --clear
//! ```
//!
//! `RUST_LOG` controls log verbosity; a `.env` file is honored.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::CommandError;

#[derive(Parser)]
#[command(name = "aiventory")]
#[command(author, version, about = "AIVENTORY inventory screens, one action per run")]
struct Cli {
    /// Emit JSON instead of human-readable output where available
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inventory screen operations
    Inventory {
        #[command(subcommand)]
        action: InventoryAction,
    },
    /// Process a barcode scan through the navigation-parameter flow
    Scan {
        /// Scanned barcode, matched against item SKUs
        #[arg(short, long)]
        barcode: String,

        /// Item name, used when an unmatched add creates a new item
        #[arg(short, long)]
        name: Option<String>,

        /// Units to remove (string-encoded, as navigation delivers it)
        #[arg(short, long)]
        qty: Option<String>,

        /// What the scanner asked for: `add` or `remove`
        #[arg(short, long)]
        action: String,
    },
    /// The dashboard read model (stat cards, forecast, AI alerts)
    Dashboard,
    /// The AI-prediction screen for one item
    Prediction {
        /// Item id to show context for; defaults to the fallback item
        #[arg(short, long)]
        id: Option<String>,
    },
    /// The notifications screen
    Notifications {
        /// Clear all notifications instead of listing them
        #[arg(long)]
        clear: bool,
    },
}

#[derive(Subcommand)]
enum InventoryAction {
    /// List items through the filter projection
    List {
        /// Free-text query against name, SKU, and category
        #[arg(short, long)]
        query: Option<String>,

        /// Status chip: `at-risk`, `warning`, or `good`
        #[arg(short, long)]
        status: Option<String>,

        /// Category chip: one of the load-time categories
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Edit an item's fields (unset flags keep current values)
    Edit {
        /// Target item id
        #[arg(short, long)]
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        sku: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        stock: Option<String>,

        #[arg(long)]
        threshold: Option<String>,
    },
    /// Sell units to a customer, producing a receipt
    Sell {
        /// Target item id
        #[arg(short, long)]
        id: String,

        /// Units to sell
        #[arg(short, long)]
        qty: String,

        /// Customer name
        #[arg(long)]
        customer: String,

        /// Customer email
        #[arg(long)]
        email: String,

        /// Customer phone
        #[arg(long)]
        phone: String,

        /// Payment method: `cash`, `card`, or `bank-transfer`
        #[arg(long, default_value = "cash")]
        method: String,

        /// Payment status: `paid` or `pending`
        #[arg(long, default_value = "paid")]
        status: String,
    },
    /// Remove units, producing a walk-in invoice
    Remove {
        /// Target item id
        #[arg(short, long)]
        id: String,

        /// Units to remove
        #[arg(short, long)]
        qty: String,
    },
    /// Delete an item (asks for confirmation unless --yes)
    Delete {
        /// Target item id
        #[arg(short, long)]
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        match &e {
            CommandError::App(app) => {
                let alert = app.alert();
                tracing::error!("{}: {}", alert.title, alert.message);
            }
            other => tracing::error!("Command failed: {other}"),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CommandError> {
    let json = cli.json;
    match cli.command {
        Commands::Inventory { action } => match action {
            InventoryAction::List {
                query,
                status,
                category,
            } => commands::inventory::list(query, status, category, json),
            InventoryAction::Edit {
                id,
                name,
                sku,
                category,
                stock,
                threshold,
            } => commands::inventory::edit(&id, name, sku, category, stock, threshold, json),
            InventoryAction::Sell {
                id,
                qty,
                customer,
                email,
                phone,
                method,
                status,
            } => commands::inventory::sell(&id, &qty, customer, email, phone, &method, &status, json),
            InventoryAction::Remove { id, qty } => commands::inventory::remove(&id, &qty, json),
            InventoryAction::Delete { id, yes } => commands::inventory::delete(&id, yes),
        },
        Commands::Scan {
            barcode,
            name,
            qty,
            action,
        } => commands::scan::run(barcode, name, qty, action, json),
        Commands::Dashboard => commands::dashboard::show(json),
        Commands::Prediction { id } => commands::prediction::show(id.as_deref(), json),
        Commands::Notifications { clear } => commands::notifications::run(clear, json),
    }
}
