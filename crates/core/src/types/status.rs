//! Status enums for various entities.

use serde::{Deserialize, Serialize};

use super::quantity::StockLevel;

/// Stock health status displayed on an inventory item.
///
/// The status is set manually (or defaulted) when an item is created or
/// edited; mutations never rewrite it behind the caller's back. Use
/// [`StockStatus::derive_from`] to compute what the status *would* be for a
/// given stock/threshold pair - the drift report and dashboard roll-ups are
/// built on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StockStatus {
    /// Stock is comfortably above the reorder threshold.
    #[default]
    Good,
    /// Stock is hovering just above the threshold.
    Warning,
    /// Stock has fallen below the threshold.
    #[serde(rename = "At Risk")]
    AtRisk,
}

impl StockStatus {
    /// Compute the status a stock/threshold pair implies.
    ///
    /// Below threshold is `AtRisk`; within 10% above it is `Warning`;
    /// anything further is `Good`.
    #[must_use]
    pub const fn derive_from(stock: StockLevel, threshold: StockLevel) -> Self {
        let stock = stock.get() as u64;
        let threshold = threshold.get() as u64;
        if stock < threshold {
            Self::AtRisk
        } else if stock * 10 <= threshold * 11 {
            Self::Warning
        } else {
            Self::Good
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "Good"),
            Self::Warning => write!(f, "Warning"),
            Self::AtRisk => write!(f, "At Risk"),
        }
    }
}

impl std::str::FromStr for StockStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Good" => Ok(Self::Good),
            "Warning" => Ok(Self::Warning),
            "At Risk" | "AtRisk" | "at-risk" => Ok(Self::AtRisk),
            _ => Err(format!("invalid stock status: {s}")),
        }
    }
}

/// Notification severity/category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A non-critical condition worth attention (e.g. low stock).
    Warning,
    /// A completed operation (e.g. a sale).
    Success,
    /// A critical condition (e.g. stock critically low).
    Error,
    /// Neutral information.
    #[default]
    Info,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// Payment method recorded on a receipt or invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    BankTransfer,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cash => write!(f, "Cash"),
            Self::Card => write!(f, "Card"),
            Self::BankTransfer => write!(f, "Bank Transfer"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" | "Cash" => Ok(Self::Cash),
            "card" | "Card" => Ok(Self::Card),
            "bank-transfer" | "Bank Transfer" => Ok(Self::BankTransfer),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

/// Payment status recorded on a receipt or invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Paid,
    Pending,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paid => write!(f, "Paid"),
            Self::Pending => write!(f, "Pending"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" | "Paid" => Ok(Self::Paid),
            "pending" | "Pending" => Ok(Self::Pending),
            _ => Err(format!("invalid payment status: {s}")),
        }
    }
}

/// Account role selected on the login and registration screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full access to inventory management.
    #[default]
    Admin,
    /// Day-to-day sales and stock operations.
    Staff,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "Admin"),
            Self::Staff => write!(f, "Staff"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" | "Admin" => Ok(Self::Admin),
            "staff" | "Staff" => Ok(Self::Staff),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}
