//! Setting identifiers, kinds and values.
//!
//! [`Setting`] names each persisted field explicitly so that generic callers
//! (a command line, a property grid) can address fields by key without any
//! runtime reflection.  The key returned by [`Setting::key`] is the exact name
//! used in the on-disk document.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// The primitive kind of a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKind {
    Bool,
    Text,
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Text => f.write_str("text"),
        }
    }
}

/// A setting value of either kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Bool(bool),
    Text(String),
}

impl SettingValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> SettingKind {
        match self {
            Self::Bool(_) => SettingKind::Bool,
            Self::Text(_) => SettingKind::Text,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Identifies one persisted setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    EnableBindings,
    EnableContextMenus,
    EnableAdvancedCommands,
    AutoCheckoutOnEdit,
    AutoCheckoutProject,
    AutoCheckoutOnSave,
    AutoCheckoutOnBuild,
    AutoAdd,
    AutoDelete,
    UseSystemEnv,
    IgnoreReadOnlyOnEdit,
    PreferVisualClient,
    Port,
    Client,
    Username,
    MainLinePath,
}

impl Setting {
    /// Every setting, in declaration order.
    pub const ALL: [Setting; 16] = [
        Setting::EnableBindings,
        Setting::EnableContextMenus,
        Setting::EnableAdvancedCommands,
        Setting::AutoCheckoutOnEdit,
        Setting::AutoCheckoutProject,
        Setting::AutoCheckoutOnSave,
        Setting::AutoCheckoutOnBuild,
        Setting::AutoAdd,
        Setting::AutoDelete,
        Setting::UseSystemEnv,
        Setting::IgnoreReadOnlyOnEdit,
        Setting::PreferVisualClient,
        Setting::Port,
        Setting::Client,
        Setting::Username,
        Setting::MainLinePath,
    ];

    /// The key used for this setting in the persisted document.
    pub fn key(self) -> &'static str {
        match self {
            Self::EnableBindings => "enableBindings",
            Self::EnableContextMenus => "enableContextMenus",
            Self::EnableAdvancedCommands => "enableAdvancedCommands",
            Self::AutoCheckoutOnEdit => "autoCheckoutOnEdit",
            Self::AutoCheckoutProject => "autoCheckoutProject",
            Self::AutoCheckoutOnSave => "autoCheckoutOnSave",
            Self::AutoCheckoutOnBuild => "autoCheckoutOnBuild",
            Self::AutoAdd => "autoAdd",
            Self::AutoDelete => "autoDelete",
            Self::UseSystemEnv => "useSystemEnv",
            Self::IgnoreReadOnlyOnEdit => "ignoreReadOnlyOnEdit",
            Self::PreferVisualClient => "preferVisualClient",
            Self::Port => "port",
            Self::Client => "client",
            Self::Username => "username",
            Self::MainLinePath => "mainLinePath",
        }
    }

    /// The primitive kind stored under this setting.
    pub fn kind(self) -> SettingKind {
        match self {
            Self::Port | Self::Client | Self::Username | Self::MainLinePath => SettingKind::Text,
            _ => SettingKind::Bool,
        }
    }

    /// Parses `raw` into a value of this setting's kind.
    ///
    /// Booleans accept `true/false`, `yes/no`, `on/off` and `1/0`, ignoring
    /// case.  Text is taken verbatim, including the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unrecognised boolean.
    pub fn parse_value(self, raw: &str) -> Result<SettingValue, ConfigError> {
        match self.kind() {
            SettingKind::Text => Ok(SettingValue::Text(raw.to_string())),
            SettingKind::Bool => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(SettingValue::Bool(true)),
                "false" | "no" | "off" | "0" => Ok(SettingValue::Bool(false)),
                _ => Err(ConfigError::InvalidValue {
                    key: self.key(),
                    expected: SettingKind::Bool,
                    value: raw.to_string(),
                }),
            },
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Setting {
    type Err = ConfigError;

    /// Matches the document key ignoring case, `_` and `-`, so `port`,
    /// `main_line_path` and `auto-checkout-on-edit` all resolve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|setting| normalize(setting.key()) == wanted)
            .ok_or_else(|| ConfigError::UnknownSetting(s.to_string()))
    }
}

fn normalize(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
