//! File-system backed settings document.
//!
//! [`FileStorage`] implements [`DocumentStore`] on top of `std::fs`, and
//! [`default_config_path`] resolves where the document lives when the host
//! does not pass an explicit path:
//!
//! - Windows:  `%APPDATA%\P4Cfg\settings.toml`
//! - Linux:    `$XDG_CONFIG_HOME/p4cfg/settings.toml` or `~/.config/p4cfg/settings.toml`
//! - macOS:    `~/Library/Application Support/P4Cfg/settings.toml`

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::application::current::{self, SharedConfig};
use crate::application::store::{ConfigStore, DocumentStore, SaveOutcome};
use crate::error::ConfigError;

pub use crate::domain::document::CONFIG_FILE_NAME;

/// Reads and writes the document with `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStorage;

impl DocumentStore for FileStorage {
    fn read(&self, path: &Path) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Writes a sibling temp file and renames it over `path`, so an
    /// interrupted write never leaves a truncated document behind.
    fn write(&self, path: &Path, contents: &str) -> std::io::Result<()> {
        // Ensure directory exists before writing.
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }

        let temp_path = temp_path_for(path);
        std::fs::write(&temp_path, contents)?;
        if let Err(e) = std::fs::rename(&temp_path, path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(e);
        }
        Ok(())
    }
}

/// `settings.toml` -> `settings.toml.tmp`, in the same directory.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Loads `path` from the file system and publishes it as the current
/// configuration.  Never fails.
///
/// An empty `path` resolves to [`default_config_path`], or to a relative
/// [`CONFIG_FILE_NAME`] when the platform directory is unknown.
pub fn load(path: impl AsRef<Path>) -> SharedConfig {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        match default_config_path() {
            Ok(default) => {
                warn!("empty configuration path, using {}", default.display());
                return ConfigStore::new(FileStorage).load(default);
            }
            Err(e) => warn!("empty configuration path: {e}"),
        }
    }
    ConfigStore::new(FileStorage).load(path)
}

/// Saves the current configuration to its backing file if it is dirty.
///
/// # Errors
///
/// Returns [`ConfigError::NotLoaded`] if nothing has been loaded yet,
/// [`ConfigError::Io`] if the file cannot be written.
pub fn save_current() -> Result<SaveOutcome, ConfigError> {
    let handle = current::current().ok_or(ConfigError::NotLoaded)?;
    ConfigStore::new(FileStorage).save(&handle)
}

/// Resolves the full path to the settings document.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the per-user directory holding the settings document.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("P4Cfg"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("p4cfg"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("P4Cfg")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
