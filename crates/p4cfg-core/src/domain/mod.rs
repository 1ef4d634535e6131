//! Domain layer: settings data, its document codec and presentation
//! metadata.  Nothing here touches the file system.
//!
//! - [`settings`] – the record that is persisted to disk.
//! - [`setting`] – identifiers, kinds and values for generic field access.
//! - [`document`] – TOML encode/decode of [`settings::Settings`].
//! - [`descriptor`] – category, label and help text per setting.

pub mod descriptor;
pub mod document;
pub mod setting;
pub mod settings;
