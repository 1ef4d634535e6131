//! TOML codec for the settings document.
//!
//! The document is a flat TOML table with one key per setting:
//!
//! ```toml
//! enableBindings = false
//! autoCheckoutOnEdit = true
//! useSystemEnv = false
//! port = "perforce:1666"
//! client = "jdoe-main"
//! ```
//!
//! The field list is fixed at compile time by the derive on
//! [`Settings`]; nothing is discovered at run time.  Reading is tolerant:
//! unknown keys are skipped and missing keys take their defaults.  A value of
//! the wrong type (e.g. `port = 1666`) is a parse error for the whole document.

use crate::domain::settings::Settings;
use crate::error::ConfigError;

/// File name of the settings document inside the config directory.
pub const CONFIG_FILE_NAME: &str = "settings.toml";

/// Serializes every setting to a TOML document.
///
/// # Errors
///
/// Returns [`ConfigError::Serialize`] if TOML serialization fails.
pub fn encode(settings: &Settings) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(settings)?)
}

/// Parses a TOML document into [`Settings`].
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] when the text is not valid TOML or a known
/// key carries a value of the wrong type.
pub fn decode(text: &str) -> Result<Settings, ConfigError> {
    Ok(toml::from_str(text)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
