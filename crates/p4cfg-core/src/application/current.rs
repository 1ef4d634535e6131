//! The process-wide current configuration.
//!
//! Hosts load settings once and then let unrelated components reach them
//! through [`current`] instead of passing a reference around.  The slot is
//! filled by [`install`], which the store calls after every load and every
//! successful save, and emptied by [`clear`] (mostly useful between tests).
//!
//! # Sharing model
//!
//! The published value is a [`SharedConfig`]: an `Arc<Mutex<Config>>`.  The
//! mutex makes the handle safe to share, but it does not make a sequence of
//! edits atomic.  A caller that reads one field and writes another based on it
//! should hold a single guard for the whole sequence.
//!
//! Loading again replaces the slot.  Handles obtained earlier stay valid but
//! keep pointing at the previous instance.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use super::config::Config;

/// Shared handle to the process-wide configuration.
pub type SharedConfig = Arc<Mutex<Config>>;

static CURRENT: RwLock<Option<SharedConfig>> = RwLock::new(None);

/// Publishes `config` as the current configuration, replacing any previous one.
pub fn install(config: SharedConfig) {
    let mut slot = CURRENT.write().unwrap_or_else(PoisonError::into_inner);
    *slot = Some(config);
}

/// Returns the current configuration, or `None` before the first load.
pub fn current() -> Option<SharedConfig> {
    CURRENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Empties the slot.
pub fn clear() {
    let mut slot = CURRENT.write().unwrap_or_else(PoisonError::into_inner);
    *slot = None;
}

/// Returns `true` if `config` is the instance currently installed.
pub fn is_current(config: &SharedConfig) -> bool {
    current().is_some_and(|installed| Arc::ptr_eq(&installed, config))
}

/// Serializes tests that touch the process-wide slot.
#[cfg(test)]
pub(crate) fn test_guard() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
