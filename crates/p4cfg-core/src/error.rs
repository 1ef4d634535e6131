//! Error type shared by every layer of the settings store.
//!
//! Only a few of these ever reach a host:
//!
//! - [`ConfigError::Io`] and [`ConfigError::Serialize`] come out of a save and
//!   mean the settings were **not** written.  The in-memory config stays dirty
//!   so the save can be retried.
//! - [`ConfigError::Parse`] is produced while loading but is absorbed there:
//!   the loader logs it and falls back to defaults.
//! - The setting-access variants come out of the generic `set` / `set_from_str`
//!   calls used by command-line and UI layers.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::setting::SettingKind;

/// Error type for settings access and persistence.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred while writing the document.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// No setting is known under the given key.
    #[error("unknown setting '{0}'")]
    UnknownSetting(String),

    /// A value of the wrong kind was supplied for a setting.
    #[error("setting '{key}' expects a {expected} value")]
    KindMismatch {
        key: &'static str,
        expected: SettingKind,
    },

    /// A textual value could not be converted to the setting's kind.
    #[error("invalid value '{value}' for {expected} setting '{key}'")]
    InvalidValue {
        key: &'static str,
        expected: SettingKind,
        value: String,
    },

    /// No configuration has been loaded into the process-wide slot yet.
    #[error("no configuration has been loaded")]
    NotLoaded,
}

impl ConfigError {
    /// Returns `true` when the error means settings could not be persisted.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Serialize(_))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
