//! Storage infrastructure: where the settings document physically lives.
//!
//! - [`file::FileStorage`] reads and writes the TOML file on disk and knows
//!   the platform-appropriate default location.
//! - [`memory::MemoryStorage`] keeps documents in memory and counts writes,
//!   for tests that must prove a clean config is never written.

pub mod file;
pub mod memory;

pub use file::{default_config_path, load, save_current, FileStorage, CONFIG_FILE_NAME};
pub use memory::MemoryStorage;
