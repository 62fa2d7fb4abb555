//! The color palette, keyed by semantic role.
//!
//! Colors are read through an explicitly injected [`Theme`] value rather
//! than an ambient lookup; rendering code asks for roles (primary, danger,
//! border) and for the role a status or notification kind maps to. The
//! default palette is the app's light scheme.

use aiventory_core::{NotificationKind, StockStatus};
use serde::{Deserialize, Serialize};

/// An RGB color decoded from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Decode a `#rrggbb` hex string (the `#` is optional).
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(digits.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(digits.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(digits.get(4..6)?, 16).ok()?;
        Some(Self { r, g, b })
    }

    /// A translucent CSS-style `rgba(...)` string at the given alpha.
    #[must_use]
    pub fn rgba(self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
    }
}

/// The injected palette, one hex color per semantic role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub primary: String,
    pub success: String,
    pub warning: String,
    pub danger: String,
    pub background: String,
    pub card_background: String,
    pub border: String,
    pub text: String,
    pub text_secondary: String,
    pub text_tertiary: String,
}

impl Default for Theme {
    /// The light palette.
    fn default() -> Self {
        Self {
            primary: "#2E3A8C".to_owned(),
            success: "#06D6A0".to_owned(),
            warning: "#FFD166".to_owned(),
            danger: "#FF6B6B".to_owned(),
            background: "#f0f2f5".to_owned(),
            card_background: "#ffffff".to_owned(),
            border: "#eeeeee".to_owned(),
            text: "#1a1a1a".to_owned(),
            text_secondary: "#333333".to_owned(),
            text_tertiary: "#666666".to_owned(),
        }
    }
}

impl Theme {
    /// Foreground color for a status badge.
    #[must_use]
    pub fn status_color(&self, status: StockStatus) -> &str {
        match status {
            StockStatus::Good => &self.success,
            StockStatus::Warning => &self.warning,
            StockStatus::AtRisk => &self.danger,
        }
    }

    /// Translucent background for a status badge: the status color at 10%
    /// alpha, falling back to a neutral grey if the hex is unreadable.
    #[must_use]
    pub fn status_badge_background(&self, status: StockStatus) -> String {
        Rgb::from_hex(self.status_color(status)).map_or_else(
            || "rgba(108, 117, 125, 0.1)".to_owned(),
            |rgb| rgb.rgba(0.1),
        )
    }

    /// Accent color for a notification row.
    #[must_use]
    pub fn notification_color(&self, kind: NotificationKind) -> &str {
        match kind {
            NotificationKind::Warning => &self.warning,
            NotificationKind::Success => &self.success,
            NotificationKind::Error => &self.danger,
            NotificationKind::Info => &self.primary,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_decodes_with_and_without_hash() {
        assert_eq!(
            Rgb::from_hex("#06D6A0"),
            Some(Rgb { r: 6, g: 214, b: 160 })
        );
        assert_eq!(
            Rgb::from_hex("FF6B6B"),
            Some(Rgb {
                r: 255,
                g: 107,
                b: 107
            })
        );
    }

    #[test]
    fn test_from_hex_rejects_junk() {
        assert_eq!(Rgb::from_hex("#fff"), None);
        assert_eq!(Rgb::from_hex("not-a-color"), None);
        assert_eq!(Rgb::from_hex(""), None);
    }

    #[test]
    fn test_status_colors_map_to_roles() {
        let theme = Theme::default();
        assert_eq!(theme.status_color(StockStatus::Good), "#06D6A0");
        assert_eq!(theme.status_color(StockStatus::Warning), "#FFD166");
        assert_eq!(theme.status_color(StockStatus::AtRisk), "#FF6B6B");
    }

    #[test]
    fn test_badge_background_is_translucent_status_color() {
        let theme = Theme::default();
        assert_eq!(
            theme.status_badge_background(StockStatus::AtRisk),
            "rgba(255, 107, 107, 0.1)"
        );
    }

    #[test]
    fn test_notification_colors() {
        let theme = Theme::default();
        assert_eq!(
            theme.notification_color(NotificationKind::Info),
            theme.primary
        );
        assert_eq!(
            theme.notification_color(NotificationKind::Error),
            theme.danger
        );
    }
}
