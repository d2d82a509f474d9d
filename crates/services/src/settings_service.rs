use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

//
// ─── LANGUAGE ──────────────────────────────────────────────────────────────────
//

/// UI language flag. A flag only: all engine behavior is language-agnostic
/// and the app ships no translation tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl Language {
    /// Two-letter code as used by the `--lang` flag and env var.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    /// Human-readable name for the settings screen.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
        }
    }

    /// The other language; the settings screen offers a two-way switch.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Spanish,
            Language::Spanish => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Language {
    type Err = SettingsError;

    /// Parses a two-letter language code.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::UnsupportedLanguage` for anything other than
    /// `en` or `es`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::English),
            "es" => Ok(Language::Spanish),
            other => Err(SettingsError::UnsupportedLanguage(other.to_string())),
        }
    }
}

//
// ─── SETTINGS SERVICE ──────────────────────────────────────────────────────────
//

/// Session-scoped app settings. Like progress, settings are in-memory only
/// and reset when the session ends.
pub struct SettingsService {
    language: Mutex<Language>,
}

impl SettingsService {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language: Mutex::new(language),
        }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        *self.lock()
    }

    pub fn set_language(&self, language: Language) {
        *self.lock() = language;
    }

    /// Switches to the other language and returns the new value.
    pub fn toggle_language(&self) -> Language {
        let mut guard = self.lock();
        *guard = guard.toggled();
        *guard
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Language> {
        self.language.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SettingsService {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
