//! Loading and saving the settings document.
//!
//! [`ConfigStore`] owns the rules of the lifecycle:
//!
//! - **Load never fails.**  A missing document is the normal first-run case
//!   and yields defaults.  An unreadable or malformed document is logged and
//!   also yields defaults.  Either way the result is published as the
//!   process-wide current configuration.
//! - **Save writes only when dirty.**  A clean config is a no-op.  A failed
//!   write is returned to the caller and the config stays dirty, so the save
//!   can simply be retried.
//!
//! The store talks to the file system only through the [`DocumentStore`]
//! trait, so tests can count writes or inject failures without touching disk.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info, warn};

use super::config::{Config, LoadOrigin};
use super::current::{self, SharedConfig};
use crate::domain::document::{self, CONFIG_FILE_NAME};
use crate::domain::settings::Settings;
use crate::error::ConfigError;

/// Raw access to the backing document.
pub trait DocumentStore: Send + Sync {
    /// Reads the whole document, returning `Ok(None)` when it does not exist.
    fn read(&self, path: &Path) -> std::io::Result<Option<String>>;

    /// Replaces the whole document with `contents`.
    fn write(&self, path: &Path, contents: &str) -> std::io::Result<()>;
}

/// What a call to [`ConfigStore::save`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The config was dirty and has been written.
    Written,
    /// The config was clean; nothing was written.
    Unchanged,
}

/// Loads and saves [`Config`] through a [`DocumentStore`].
#[derive(Debug, Clone, Default)]
pub struct ConfigStore<S> {
    storage: S,
}

impl<S: DocumentStore> ConfigStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads the document at `path` into a [`Config`] without publishing it.
    ///
    /// Falls back to defaults when the document is missing, unreadable or
    /// malformed; see [`LoadOrigin`] for how the cases are told apart.  An
    /// empty `path` is replaced by a relative [`CONFIG_FILE_NAME`], so the
    /// result always has a backing path to save to.
    pub fn read(&self, path: impl AsRef<Path>) -> Config {
        let path = path.as_ref();
        let path = if path.as_os_str().is_empty() {
            warn!("empty configuration path, using {CONFIG_FILE_NAME}");
            Path::new(CONFIG_FILE_NAME)
        } else {
            path
        };

        let (settings, origin) = match self.storage.read(path) {
            Ok(Some(text)) => {
                info!("loading configuration from {}", path.display());
                match document::decode(&text) {
                    Ok(settings) => (settings, LoadOrigin::Document),
                    Err(e) => {
                        warn!(
                            "failed to parse configuration at {}: {e}; reverting to defaults",
                            path.display()
                        );
                        (Settings::default(), LoadOrigin::Recovered)
                    }
                }
            }
            Ok(None) => {
                debug!("no configuration at {}, using defaults", path.display());
                (Settings::default(), LoadOrigin::Missing)
            }
            Err(e) => {
                warn!(
                    "failed to read configuration at {}: {e}; reverting to defaults",
                    path.display()
                );
                (Settings::default(), LoadOrigin::Recovered)
            }
        };

        Config::from_parts(settings, path, origin)
    }

    /// Loads the document at `path` and publishes it as the current
    /// configuration.  Never fails.
    pub fn load(&self, path: impl AsRef<Path>) -> SharedConfig {
        let handle = Arc::new(Mutex::new(self.read(path)));
        current::install(Arc::clone(&handle));
        handle
    }

    /// Writes `config` to its backing path if it is dirty.
    ///
    /// On success the config is clean afterwards.  On failure it is left
    /// dirty and untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the document cannot be written, or
    /// [`ConfigError::Serialize`] if encoding fails.
    pub fn save_config(&self, config: &mut Config) -> Result<SaveOutcome, ConfigError> {
        if !config.is_dirty() {
            debug!(
                "configuration at {} unchanged, skipping save",
                config.file_path().display()
            );
            return Ok(SaveOutcome::Unchanged);
        }

        let path = config.file_path();
        info!("saving configuration to {}", path.display());
        let content = document::encode(config.settings())?;
        self.storage
            .write(path, &content)
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        config.mark_saved();
        Ok(SaveOutcome::Written)
    }

    /// Saves a shared config and, after a write, republishes it as current.
    ///
    /// # Errors
    ///
    /// See [`ConfigStore::save_config`].
    pub fn save(&self, handle: &SharedConfig) -> Result<SaveOutcome, ConfigError> {
        let outcome = {
            let mut config = handle.lock().unwrap_or_else(PoisonError::into_inner);
            self.save_config(&mut config)?
        };
        if outcome == SaveOutcome::Written {
            current::install(Arc::clone(handle));
        }
        Ok(outcome)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
