//! Mock authentication and settings-screen state.
//!
//! There is no authentication backend; login and registration are pure
//! form-validation flows that end in a [`MockSession`] value. The settings
//! screen's profile and change-password modals reuse the generic form
//! session from [`crate::forms`], and logout is the same two-option
//! confirmation as a destructive delete.

use aiventory_core::{Email, UserRole};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::confirm::Confirmation;
use crate::forms::{FormError, FormModel};

/// Minimum accepted password length on the change-password form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// The signed-in state a successful login or registration produces.
///
/// Nothing backs it; it exists for the screen to carry who is "logged in"
/// until logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockSession {
    /// Address the user signed in with.
    pub email: Email,
    /// Selected role.
    pub role: UserRole,
}

impl MockSession {
    /// End the session after the logout confirmation prompt.
    ///
    /// Declining keeps the session; confirming ends it.
    #[must_use]
    pub fn logout(self, confirmation: Confirmation) -> Option<Self> {
        if confirmation.is_confirmed() {
            info!(email = %self.email, "Logged out");
            None
        } else {
            Some(self)
        }
    }
}

/// The login screen's form state.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
    pub role: UserRole,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: SecretString::from(String::new()),
            role: UserRole::Admin,
        }
    }
}

impl LoginForm {
    /// Validate and produce a session.
    ///
    /// # Errors
    ///
    /// [`FormError::MissingFields`] when email or password is empty,
    /// [`FormError::InvalidEmail`] when the address does not parse.
    pub fn commit(&self) -> Result<MockSession, FormError> {
        if self.email.trim().is_empty() || self.password.expose_secret().is_empty() {
            return Err(FormError::MissingFields);
        }
        let email = Email::parse(self.email.trim())?;

        info!(email = %email, role = %self.role, "Logged in");
        Ok(MockSession {
            email,
            role: self.role,
        })
    }
}

/// The registration screen's form state.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm: SecretString,
    pub role: UserRole,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            password: SecretString::from(String::new()),
            confirm: SecretString::from(String::new()),
            role: UserRole::Admin,
        }
    }
}

impl RegisterForm {
    /// Validate and produce a session for the new account.
    ///
    /// # Errors
    ///
    /// [`FormError::MissingFields`] when any field is empty,
    /// [`FormError::PasswordMismatch`] when the confirmation differs,
    /// [`FormError::InvalidEmail`] when the address does not parse.
    pub fn commit(&self) -> Result<MockSession, FormError> {
        let all_present = !self.full_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.password.expose_secret().is_empty()
            && !self.confirm.expose_secret().is_empty();
        if !all_present {
            return Err(FormError::MissingFields);
        }

        if self.password.expose_secret() != self.confirm.expose_secret() {
            return Err(FormError::PasswordMismatch);
        }

        let email = Email::parse(self.email.trim())?;

        info!(email = %email, role = %self.role, "Registered account");
        Ok(MockSession {
            email,
            role: self.role,
        })
    }
}

/// The profile block on the settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Free-text role label.
    pub role: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Dexter Morgan".to_owned(),
            role: "Administrator".to_owned(),
        }
    }
}

/// The edit-profile modal: string mirrors of the profile fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub role: String,
}

impl FormModel for ProfileForm {
    type Seed = Profile;
    type Output = Profile;

    fn open(seed: &Self::Seed) -> Self {
        Self {
            name: seed.name.clone(),
            role: seed.role.clone(),
        }
    }

    fn validate(&self) -> Result<Self::Output, FormError> {
        if self.name.trim().is_empty() || self.role.trim().is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(Profile {
            name: self.name.trim().to_owned(),
            role: self.role.trim().to_owned(),
        })
    }
}

/// The change-password modal.
#[derive(Debug, Clone)]
pub struct PasswordForm {
    pub current: SecretString,
    pub new: SecretString,
    pub confirm: SecretString,
}

impl Default for PasswordForm {
    fn default() -> Self {
        Self {
            current: SecretString::from(String::new()),
            new: SecretString::from(String::new()),
            confirm: SecretString::from(String::new()),
        }
    }
}

/// Marker output: a successful password change carries no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordChanged;

impl FormModel for PasswordForm {
    type Seed = ();
    type Output = PasswordChanged;

    fn open((): &Self::Seed) -> Self {
        Self::default()
    }

    fn validate(&self) -> Result<Self::Output, FormError> {
        let all_present = !self.current.expose_secret().is_empty()
            && !self.new.expose_secret().is_empty()
            && !self.confirm.expose_secret().is_empty();
        if !all_present {
            return Err(FormError::MissingFields);
        }

        if self.new.expose_secret() != self.confirm.expose_secret() {
            return Err(FormError::PasswordMismatch);
        }

        if self.new.expose_secret().len() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }

        Ok(PasswordChanged)
    }
}

/// The settings screen's toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Push-notification toggle.
    pub notifications: bool,
    /// Auto-sync toggle.
    pub auto_sync: bool,
}

impl Default for Preferences {
    /// Both toggles start on.
    fn default() -> Self {
        Self {
            notifications: true,
            auto_sync: true,
        }
    }
}

impl Preferences {
    /// Flip the notification toggle.
    pub fn toggle_notifications(&mut self) {
        self.notifications = !self.notifications;
    }

    /// Flip the auto-sync toggle.
    pub fn toggle_auto_sync(&mut self) {
        self.auto_sync = !self.auto_sync;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::forms::FormSession;

    #[test]
    fn test_login_requires_both_fields() {
        let form = LoginForm {
            email: "owner@aiventory.app".to_owned(),
            ..LoginForm::default()
        };
        assert_eq!(form.commit().unwrap_err(), FormError::MissingFields);
    }

    #[test]
    fn test_login_yields_session() {
        let form = LoginForm {
            email: "owner@aiventory.app".to_owned(),
            password: SecretString::from("hunter22"),
            role: UserRole::Staff,
        };
        let session = form.commit().unwrap();
        assert_eq!(session.role, UserRole::Staff);
        assert_eq!(session.email.as_str(), "owner@aiventory.app");
    }

    #[test]
    fn test_register_rejects_password_mismatch() {
        let form = RegisterForm {
            full_name: "Ana Reyes".to_owned(),
            email: "ana@example.com".to_owned(),
            password: SecretString::from("secret-1"),
            confirm: SecretString::from("secret-2"),
            role: UserRole::Admin,
        };
        assert_eq!(form.commit().unwrap_err(), FormError::PasswordMismatch);
    }

    #[test]
    fn test_register_rejects_bad_email() {
        let form = RegisterForm {
            full_name: "Ana Reyes".to_owned(),
            email: "ana-at-example".to_owned(),
            password: SecretString::from("secret-1"),
            confirm: SecretString::from("secret-1"),
            role: UserRole::Admin,
        };
        assert!(matches!(
            form.commit().unwrap_err(),
            FormError::InvalidEmail(_)
        ));
    }

    #[test]
    fn test_logout_confirmation() {
        let session = MockSession {
            email: Email::parse("owner@aiventory.app").unwrap(),
            role: UserRole::Admin,
        };
        let session = session.logout(Confirmation::Cancelled).unwrap();
        assert!(session.logout(Confirmation::Confirmed).is_none());
    }

    #[test]
    fn test_profile_modal_commit_and_cancel() {
        let mut profile = Profile::default();
        let mut session = FormSession::<ProfileForm>::closed();

        session.open(&profile).name = "Debra Morgan".to_owned();
        profile = session.commit().unwrap();
        assert_eq!(profile.name, "Debra Morgan");
        assert_eq!(profile.role, "Administrator");

        // Cancel discards the change.
        session.open(&profile).name = String::new();
        session.cancel();
        assert_eq!(profile.name, "Debra Morgan");
    }

    #[test]
    fn test_password_form_rules() {
        let mut session = FormSession::<PasswordForm>::closed();

        session.open(&());
        assert_eq!(session.commit().unwrap_err(), FormError::MissingFields);

        {
            let form = session.form_mut().unwrap();
            form.current = SecretString::from("old-secret");
            form.new = SecretString::from("short");
            form.confirm = SecretString::from("short");
        }
        assert_eq!(
            session.commit().unwrap_err(),
            FormError::PasswordTooShort { min: 6 }
        );

        {
            let form = session.form_mut().unwrap();
            form.new = SecretString::from("long-enough");
            form.confirm = SecretString::from("long-enuff");
        }
        assert_eq!(session.commit().unwrap_err(), FormError::PasswordMismatch);

        session.form_mut().unwrap().confirm = SecretString::from("long-enough");
        assert_eq!(session.commit().unwrap(), PasswordChanged);
        assert!(!session.is_open());
    }

    #[test]
    fn test_preferences_toggles() {
        let mut prefs = Preferences::default();
        assert!(prefs.notifications && prefs.auto_sync);
        prefs.toggle_notifications();
        prefs.toggle_auto_sync();
        assert!(!prefs.notifications && !prefs.auto_sync);
    }
}
