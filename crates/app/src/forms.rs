//! Transient form sessions backing the modals.
//!
//! Every modal follows the same lifecycle: open seeded from the selected
//! record, absorb field edits as text, then either commit (validate and
//! produce a typed value) or cancel. A failed commit leaves the session
//! open so the user can correct the input, exactly like the blocking alert
//! leaving the modal up. [`FormSession`] captures that lifecycle once;
//! each modal supplies a [`FormModel`].

use aiventory_core::{
    Email, EmailError, PaymentMethod, PaymentStatus, Quantity, QuantityError, Sku, SkuError,
    StockLevel,
};

use crate::item::InventoryItem;
use crate::receipt::Customer;
use crate::store::{ItemEdit, SaleDetails};

/// User-input validation failures, surfaced as blocking alerts.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required field is empty.
    #[error("Please fill in all fields")]
    MissingFields,

    /// The quantity field is not a positive whole number.
    #[error("Please enter a valid quantity")]
    InvalidQuantity(#[source] QuantityError),

    /// A numeric field (stock, threshold) did not parse.
    #[error("{field} must be a whole number")]
    InvalidNumber {
        /// Which field failed.
        field: &'static str,
        #[source]
        source: QuantityError,
    },

    /// The email field did not parse.
    #[error("Please enter a valid email address")]
    InvalidEmail(#[from] EmailError),

    /// The SKU field did not parse.
    #[error("invalid sku: {0}")]
    InvalidSku(#[from] SkuError),

    /// A password and its confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// The new password is too short.
    #[error("Password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted length.
        min: usize,
    },

    /// Commit was called with no form open.
    #[error("no form is open")]
    Closed,
}

/// One modal's form: how to seed it and how to validate a commit.
pub trait FormModel: Sized {
    /// What the form is seeded from when the modal opens.
    type Seed: ?Sized;
    /// The typed value a successful commit produces.
    type Output;

    /// Build the form's initial field state from the seed.
    fn open(seed: &Self::Seed) -> Self;

    /// Validate current field state into the typed output.
    ///
    /// # Errors
    ///
    /// A [`FormError`] describing the first problem found; the form state
    /// is left as-is for correction.
    fn validate(&self) -> Result<Self::Output, FormError>;
}

/// The open/edit/commit/cancel lifecycle shared by all modals.
#[derive(Debug, Clone)]
pub struct FormSession<F> {
    form: Option<F>,
}

impl<F> Default for FormSession<F> {
    fn default() -> Self {
        Self { form: None }
    }
}

impl<F: FormModel> FormSession<F> {
    /// A session with no modal open.
    #[must_use]
    pub const fn closed() -> Self {
        Self { form: None }
    }

    /// Open the modal, seeding field state from the selected record.
    /// Returns the form for field edits.
    pub fn open(&mut self, seed: &F::Seed) -> &mut F {
        self.form.insert(F::open(seed))
    }

    /// Whether a modal is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.form.is_some()
    }

    /// Current field state, if open.
    #[must_use]
    pub const fn form(&self) -> Option<&F> {
        self.form.as_ref()
    }

    /// Mutable field state, if open.
    pub fn form_mut(&mut self) -> Option<&mut F> {
        self.form.as_mut()
    }

    /// Validate and close on success. On failure the session stays open
    /// with field state intact, mirroring the modal surviving the alert.
    ///
    /// # Errors
    ///
    /// [`FormError::Closed`] when nothing is open, otherwise whatever the
    /// form's validation reports.
    pub fn commit(&mut self) -> Result<F::Output, FormError> {
        let form = self.form.as_ref().ok_or(FormError::Closed)?;
        let output = form.validate()?;
        self.form = None;
        Ok(output)
    }

    /// Discard field state and close.
    pub fn cancel(&mut self) {
        self.form = None;
    }
}

/// The edit-item modal: string mirrors of the five editable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub stock: String,
    pub threshold: String,
}

impl FormModel for EditForm {
    type Seed = InventoryItem;
    type Output = ItemEdit;

    fn open(seed: &Self::Seed) -> Self {
        Self {
            name: seed.name.clone(),
            sku: seed.sku.as_str().to_owned(),
            category: seed.category.clone(),
            stock: seed.stock.to_string(),
            threshold: seed.threshold.to_string(),
        }
    }

    fn validate(&self) -> Result<Self::Output, FormError> {
        let all_present = [
            &self.name,
            &self.sku,
            &self.category,
            &self.stock,
            &self.threshold,
        ]
        .into_iter()
        .all(|field| !field.trim().is_empty());
        if !all_present {
            return Err(FormError::MissingFields);
        }

        let sku = Sku::parse(self.sku.trim())?;
        let stock = StockLevel::parse(&self.stock).map_err(|source| FormError::InvalidNumber {
            field: "Stock",
            source,
        })?;
        let threshold =
            StockLevel::parse(&self.threshold).map_err(|source| FormError::InvalidNumber {
                field: "Threshold",
                source,
            })?;

        Ok(ItemEdit {
            name: self.name.trim().to_owned(),
            sku,
            category: self.category.trim().to_owned(),
            stock,
            threshold,
        })
    }
}

/// The sell modal: quantity plus customer and payment details.
#[derive(Debug, Clone)]
pub struct SellForm {
    pub quantity: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
}

impl FormModel for SellForm {
    type Seed = InventoryItem;
    type Output = SaleDetails;

    fn open(_seed: &Self::Seed) -> Self {
        Self {
            quantity: "1".to_owned(),
            customer_name: String::new(),
            customer_email: String::new(),
            customer_phone: String::new(),
            payment_method: PaymentMethod::Cash,
            payment_status: PaymentStatus::Paid,
        }
    }

    fn validate(&self) -> Result<Self::Output, FormError> {
        let all_present = [
            &self.customer_name,
            &self.customer_email,
            &self.customer_phone,
        ]
        .into_iter()
        .all(|field| !field.trim().is_empty());
        if !all_present {
            return Err(FormError::MissingFields);
        }

        let quantity = Quantity::parse(&self.quantity).map_err(FormError::InvalidQuantity)?;
        let email = Email::parse(self.customer_email.trim())?;

        Ok(SaleDetails {
            quantity,
            customer: Customer {
                name: self.customer_name.trim().to_owned(),
                email,
                phone: self.customer_phone.trim().to_owned(),
            },
            payment_method: self.payment_method,
            payment_status: self.payment_status,
        })
    }
}

/// The remove-quantity modal: a single quantity field, seeded to `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveForm {
    pub quantity: String,
}

impl FormModel for RemoveForm {
    type Seed = InventoryItem;
    type Output = Quantity;

    fn open(_seed: &Self::Seed) -> Self {
        Self {
            quantity: "1".to_owned(),
        }
    }

    fn validate(&self) -> Result<Self::Output, FormError> {
        Quantity::parse(&self.quantity).map_err(FormError::InvalidQuantity)
    }
}
