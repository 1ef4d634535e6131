//! The persisted settings record.
//!
//! [`Settings`] is plain data: one field per setting and nothing else.  The
//! dirty flag and the backing path live on the application-layer wrapper so
//! they can never leak into the document.
//!
//! # Serde defaults
//!
//! The container-level `#[serde(default)]` fills any key missing from the
//! document from [`Settings::default`], and serde ignores unknown keys unless
//! told otherwise.  Together that gives the tolerant reading rules the store
//! relies on: old documents keep loading after new settings are added, and
//! documents written by newer versions still load in older ones.

use serde::{Deserialize, Serialize};

use super::setting::{Setting, SettingValue};

/// Every persisted setting, keyed in the document by its camelCase name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub enable_bindings: bool,
    pub enable_context_menus: bool,
    pub enable_advanced_commands: bool,
    pub auto_checkout_on_edit: bool,
    pub auto_checkout_project: bool,
    pub auto_checkout_on_save: bool,
    pub auto_checkout_on_build: bool,
    pub auto_add: bool,
    pub auto_delete: bool,
    pub use_system_env: bool,
    pub ignore_read_only_on_edit: bool,
    pub prefer_visual_client: bool,
    pub port: String,
    pub client: String,
    pub username: String,
    pub main_line_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable_bindings: false,
            enable_context_menus: false,
            enable_advanced_commands: false,
            auto_checkout_on_edit: false,
            auto_checkout_project: false,
            auto_checkout_on_save: false,
            auto_checkout_on_build: false,
            auto_add: false,
            auto_delete: false,
            // Picks up P4PORT/P4CLIENT/P4USER from the environment unless the
            // user opts into the explicit connection fields below.
            use_system_env: true,
            ignore_read_only_on_edit: false,
            prefer_visual_client: false,
            port: String::new(),
            client: String::new(),
            username: String::new(),
            main_line_path: String::new(),
        }
    }
}

impl Settings {
    /// Reads one setting as a [`SettingValue`].
    pub fn value(&self, setting: Setting) -> SettingValue {
        match setting {
            Setting::EnableBindings => self.enable_bindings.into(),
            Setting::EnableContextMenus => self.enable_context_menus.into(),
            Setting::EnableAdvancedCommands => self.enable_advanced_commands.into(),
            Setting::AutoCheckoutOnEdit => self.auto_checkout_on_edit.into(),
            Setting::AutoCheckoutProject => self.auto_checkout_project.into(),
            Setting::AutoCheckoutOnSave => self.auto_checkout_on_save.into(),
            Setting::AutoCheckoutOnBuild => self.auto_checkout_on_build.into(),
            Setting::AutoAdd => self.auto_add.into(),
            Setting::AutoDelete => self.auto_delete.into(),
            Setting::UseSystemEnv => self.use_system_env.into(),
            Setting::IgnoreReadOnlyOnEdit => self.ignore_read_only_on_edit.into(),
            Setting::PreferVisualClient => self.prefer_visual_client.into(),
            Setting::Port => self.port.clone().into(),
            Setting::Client => self.client.clone().into(),
            Setting::Username => self.username.clone().into(),
            Setting::MainLinePath => self.main_line_path.clone().into(),
        }
    }

    /// Returns the boolean slot for `setting`, or `None` for text settings.
    pub(crate) fn bool_slot(&mut self, setting: Setting) -> Option<&mut bool> {
        let slot = match setting {
            Setting::EnableBindings => &mut self.enable_bindings,
            Setting::EnableContextMenus => &mut self.enable_context_menus,
            Setting::EnableAdvancedCommands => &mut self.enable_advanced_commands,
            Setting::AutoCheckoutOnEdit => &mut self.auto_checkout_on_edit,
            Setting::AutoCheckoutProject => &mut self.auto_checkout_project,
            Setting::AutoCheckoutOnSave => &mut self.auto_checkout_on_save,
            Setting::AutoCheckoutOnBuild => &mut self.auto_checkout_on_build,
            Setting::AutoAdd => &mut self.auto_add,
            Setting::AutoDelete => &mut self.auto_delete,
            Setting::UseSystemEnv => &mut self.use_system_env,
            Setting::IgnoreReadOnlyOnEdit => &mut self.ignore_read_only_on_edit,
            Setting::PreferVisualClient => &mut self.prefer_visual_client,
            Setting::Port | Setting::Client | Setting::Username | Setting::MainLinePath => {
                return None
            }
        };
        Some(slot)
    }

    /// Returns the text slot for `setting`, or `None` for boolean settings.
    pub(crate) fn text_slot(&mut self, setting: Setting) -> Option<&mut String> {
        match setting {
            Setting::Port => Some(&mut self.port),
            Setting::Client => Some(&mut self.client),
            Setting::Username => Some(&mut self.username),
            Setting::MainLinePath => Some(&mut self.main_line_path),
            _ => None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
