// SPDX-License-Identifier: MPL-2.0
//! Theme mode handling: persisted light/dark preference with an OS fallback.

use serde::{Deserialize, Serialize};

/// Two-valued persisted theme preference, plus a `System` default used
/// until the user toggles explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Whether this mode resolves to a dark appearance. `System` asks the
    /// OS for its color-scheme preference.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => system_prefers_dark(),
        }
    }
}

/// The explicit mode the theme toggle switches to, given the currently
/// effective appearance: always the opposite, never back to `System`.
#[must_use]
pub fn toggle(effective_dark: bool) -> ThemeMode {
    if effective_dark {
        ThemeMode::Light
    } else {
        ThemeMode::Dark
    }
}

/// Detects the OS color-scheme preference. Defaults to dark when the
/// detection fails or reports no preference.
#[must_use]
pub fn system_prefers_dark() -> bool {
    !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_resolve_without_os_lookup() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn toggle_flips_to_the_opposite_explicit_mode() {
        assert_eq!(toggle(true), ThemeMode::Light);
        assert_eq!(toggle(false), ThemeMode::Dark);
        // the persisted preference is always explicit after a toggle
        assert_ne!(toggle(ThemeMode::System.is_dark()), ThemeMode::System);
    }

    #[test]
    fn serializes_as_lowercase() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrap {
            mode: ThemeMode,
        }
        let serialized = toml::to_string(&Wrap {
            mode: ThemeMode::Dark,
        })
        .expect("serialize");
        assert!(serialized.contains("\"dark\""));
        let parsed: Wrap = toml::from_str("mode = \"light\"").expect("deserialize");
        assert_eq!(parsed.mode, ThemeMode::Light);
    }
}
