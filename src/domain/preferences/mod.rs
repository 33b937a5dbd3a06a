//! Preferences module - locally persisted user settings and records.
//!
//! The persisted shapes match what the browser app wrote, so a store
//! filled by either can be read by the other.

use serde::{Deserialize, Serialize};

/// Storage key of the theme flag.
pub const THEME_STORAGE_KEY: &str = "theme-storage";

/// Storage key of the signed-in user.
pub const USER_STORAGE_KEY: &str = "user";

/// Storage key of the priority list.
pub const PRIORITIES_STORAGE_KEY: &str = "priorities";

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreference {
    #[serde(rename = "isDarkMode")]
    pub dark_mode: bool,
}

impl ThemePreference {
    pub fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    /// Flips light/dark.
    pub fn toggled(&self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
        }
    }

    /// CSS class applied to the document root.
    pub fn root_class(&self) -> Option<&'static str> {
        if self.dark_mode {
            Some("dark")
        } else {
            None
        }
    }
}

/// Persisted wrapper: `{"state":{"isDarkMode":true},"version":0}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeEnvelope {
    pub state: ThemePreference,
    #[serde(default)]
    pub version: u32,
}

impl From<ThemePreference> for ThemeEnvelope {
    fn from(state: ThemePreference) -> Self {
        Self { state, version: 0 }
    }
}

/// Who is signed in, as reported by the identity widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}
