//! # p4cfg-core
//!
//! Persistent settings store for a Perforce editor integration.
//!
//! The crate keeps exactly one settings document per process: it is loaded
//! once at startup, mutated through setters that mark it dirty, and written
//! back to disk only when something actually changed.
//!
//! # Architecture overview
//!
//! - **`domain`** – Pure data with no I/O: the persisted [`Settings`] record,
//!   its TOML codec, the [`Setting`] identifiers used for generic access, and
//!   the descriptor table (category, label, help text) consumed by
//!   presentation code.
//!
//! - **`application`** – The lifecycle.  [`Config`] wraps the settings with a
//!   dirty flag and the backing path, [`ConfigStore`] loads and saves it, and
//!   the `current` module publishes the process-wide instance.
//!
//! - **`infrastructure`** – [`FileStorage`], the file-system implementation
//!   of the [`DocumentStore`] seam, plus the platform default path and the
//!   `load` / `save_current` entry points hosts normally call.
//!
//! # Typical host usage
//!
//! ```no_run
//! use std::sync::PoisonError;
//!
//! use p4cfg_core::{current, load, save_current};
//!
//! // Startup: never fails, falls back to defaults on a missing or corrupt file.
//! load("/home/me/.config/p4cfg/settings.toml");
//!
//! // Anywhere else in the process:
//! if let Some(handle) = current() {
//!     let mut cfg = handle.lock().unwrap_or_else(PoisonError::into_inner);
//!     cfg.set_port("perforce:1666");
//! }
//!
//! // Shutdown: writes only when something changed.
//! save_current().expect("settings were not written");
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::config::{Config, LoadOrigin};
pub use application::current::{clear, current, install, is_current, SharedConfig};
pub use application::store::{ConfigStore, DocumentStore, SaveOutcome};
pub use domain::descriptor::{by_category, descriptor, descriptors, Category, SettingDescriptor};
pub use domain::setting::{Setting, SettingKind, SettingValue};
pub use domain::settings::Settings;
pub use error::ConfigError;
pub use infrastructure::storage::{
    default_config_path, load, save_current, FileStorage, MemoryStorage,
};
