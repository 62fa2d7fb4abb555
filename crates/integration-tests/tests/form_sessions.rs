//! Integration tests for modal form sessions.
//!
//! A failed commit must leave both the session (the modal stays open) and
//! the target store untouched; a cancel discards everything.

#![allow(clippy::unwrap_used)]

use aiventory_app::auth::{LoginForm, PasswordForm, RegisterForm};
use aiventory_app::forms::{EditForm, FormError, FormSession, RemoveForm, SellForm};
use aiventory_app::{Confirmation, ItemStore};
use aiventory_core::{ItemId, StockLevel, UserRole};
use secrecy::SecretString;

// =============================================================================
// Edit Modal
// =============================================================================

#[test]
fn test_failed_edit_commit_leaves_store_untouched() {
    let mut store = ItemStore::seeded();
    let id = ItemId::new("1");
    let item = store.get(&id).unwrap().clone();

    let mut session = FormSession::<EditForm>::closed();
    let form = session.open(&item);
    form.name = String::new();
    form.stock = "60".to_owned();

    assert_eq!(session.commit().unwrap_err(), FormError::MissingFields);
    assert!(session.is_open());
    assert_eq!(store.get(&id).unwrap().stock, StockLevel::new(45));

    // Fixing the field lets the same session commit, and only then does
    // the store change.
    session.form_mut().unwrap().name = "Motorcycle Batteries".to_owned();
    let edit = session.commit().unwrap();
    store.apply_edit(&id, edit).unwrap();
    assert_eq!(store.get(&id).unwrap().stock, StockLevel::new(60));
}

#[test]
fn test_edit_rejects_numeric_garbage_rather_than_saving_it() {
    let store = ItemStore::seeded();
    let item = store.get(&ItemId::new("2")).unwrap().clone();

    let mut session = FormSession::<EditForm>::closed();
    session.open(&item).threshold = "3O".to_owned(); // letter O, not zero

    assert!(matches!(
        session.commit().unwrap_err(),
        FormError::InvalidNumber {
            field: "Threshold",
            ..
        }
    ));
}

// =============================================================================
// Sell and Remove Modals
// =============================================================================

#[test]
fn test_sell_modal_full_flow() {
    let mut store = ItemStore::seeded();
    let id = ItemId::new("5");
    let item = store.get(&id).unwrap().clone();

    let mut session = FormSession::<SellForm>::closed();
    let form = session.open(&item);
    form.quantity = "5".to_owned();
    form.customer_name = "Miguel Santos".to_owned();
    form.customer_email = "miguel@example.com".to_owned();
    form.customer_phone = "0917 555 0142".to_owned();

    let sale = session.commit().unwrap();
    let receipt = store.sell(&id, sale).unwrap();

    assert_eq!(receipt.customer.name, "Miguel Santos");
    assert_eq!(store.get(&id).unwrap().stock, StockLevel::new(60));
    assert!(!session.is_open());
}

#[test]
fn test_remove_modal_defaults_to_one_unit() {
    let mut store = ItemStore::seeded();
    let id = ItemId::new("4");
    let item = store.get(&id).unwrap().clone();

    let mut session = FormSession::<RemoveForm>::closed();
    session.open(&item);

    // Untouched form commits the default quantity of 1.
    let quantity = session.commit().unwrap();
    store.remove_quantity(&id, quantity).unwrap();
    assert_eq!(store.get(&id).unwrap().stock, StockLevel::new(14));
}

#[test]
fn test_cancel_discards_a_half_filled_modal() {
    let store = ItemStore::seeded();
    let item = store.get(&ItemId::new("1")).unwrap().clone();

    let mut session = FormSession::<SellForm>::closed();
    let form = session.open(&item);
    form.quantity = "3".to_owned();
    form.customer_name = "Ana".to_owned();
    session.cancel();

    assert!(!session.is_open());
    assert_eq!(session.commit().unwrap_err(), FormError::Closed);

    // Reopening starts from the seeded defaults again.
    let form = session.open(&item);
    assert_eq!(form.quantity, "1");
    assert!(form.customer_name.is_empty());
}

// =============================================================================
// Auth Forms
// =============================================================================

#[test]
fn test_login_then_logout_round_trip() {
    let form = LoginForm {
        email: "owner@aiventory.app".to_owned(),
        password: SecretString::from("hunter22"),
        role: UserRole::Admin,
    };
    let session = form.commit().unwrap();
    assert_eq!(session.role, UserRole::Admin);

    // Declining the logout prompt keeps the session alive.
    let session = session.logout(Confirmation::Cancelled).unwrap();
    assert!(session.logout(Confirmation::Confirmed).is_none());
}

#[test]
fn test_registration_validation_order() {
    let mut form = RegisterForm {
        full_name: String::new(),
        email: "ana@example.com".to_owned(),
        password: SecretString::from("secret-1"),
        confirm: SecretString::from("secret-2"),
        role: UserRole::Staff,
    };

    // Empty fields are reported before the mismatch.
    assert_eq!(form.commit().unwrap_err(), FormError::MissingFields);

    form.full_name = "Ana Reyes".to_owned();
    assert_eq!(form.commit().unwrap_err(), FormError::PasswordMismatch);

    form.confirm = SecretString::from("secret-1");
    let session = form.commit().unwrap();
    assert_eq!(session.email.as_str(), "ana@example.com");
    assert_eq!(session.role, UserRole::Staff);
}

#[test]
fn test_change_password_enforces_minimum_length() {
    let mut session = FormSession::<PasswordForm>::closed();
    let form = session.open(&());
    form.current = SecretString::from("old-secret");
    form.new = SecretString::from("12345");
    form.confirm = SecretString::from("12345");

    assert_eq!(
        session.commit().unwrap_err(),
        FormError::PasswordTooShort { min: 6 }
    );

    let form = session.form_mut().unwrap();
    form.new = SecretString::from("123456");
    form.confirm = SecretString::from("123456");
    assert!(session.commit().is_ok());
}
