//! The in-memory configuration with change tracking.
//!
//! [`Config`] wraps the persisted [`Settings`] together with the state that is
//! never written to disk: the backing document path, where the values came
//! from, and the dirty flag.
//!
//! # Dirty tracking
//!
//! The settings are private.  Every write goes through a setter, and every
//! setter marks the config dirty, even when the new value equals the old one.
//! The only way back to clean is [`Config::mark_saved`], which the store calls
//! after a successful write.
//!
//! ```text
//!   Clean ──setter──▶ Dirty ──save ok──▶ Clean
//!                       │
//!                       └──save failed──▶ Dirty
//! ```

use std::path::{Path, PathBuf};

use crate::domain::setting::{Setting, SettingValue};
use crate::domain::settings::Settings;
use crate::error::ConfigError;

/// Where the values of a [`Config`] came from when it was loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    /// Parsed from an existing document.
    Document,
    /// No document existed; defaults were used.
    Missing,
    /// A document existed but could not be read or parsed; defaults were used.
    Recovered,
    /// Built in memory, never loaded.
    Detached,
}

/// Settings plus backing path and dirty flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    settings: Settings,
    file_path: PathBuf,
    origin: LoadOrigin,
    dirty: bool,
}

/// Generates a getter and a dirty-marking setter per setting.
macro_rules! bool_accessors {
    ($($field:ident => $setter:ident),* $(,)?) => {
        $(
            pub fn $field(&self) -> bool {
                self.settings.$field
            }

            pub fn $setter(&mut self, value: bool) {
                self.settings.$field = value;
                self.dirty = true;
            }
        )*
    };
}

macro_rules! text_accessors {
    ($($field:ident => $setter:ident),* $(,)?) => {
        $(
            pub fn $field(&self) -> &str {
                &self.settings.$field
            }

            pub fn $setter(&mut self, value: impl Into<String>) {
                self.settings.$field = value.into();
                self.dirty = true;
            }
        )*
    };
}

impl Config {
    /// Creates a config from already-loaded settings.
    ///
    /// Values read from an existing document start clean; defaults used in
    /// place of a missing or unreadable document start dirty, so the next
    /// save writes them out.
    pub fn from_parts(
        settings: Settings,
        file_path: impl Into<PathBuf>,
        origin: LoadOrigin,
    ) -> Self {
        Self {
            settings,
            file_path: file_path.into(),
            origin,
            dirty: origin != LoadOrigin::Document,
        }
    }

    /// Creates a default config with no backing path.
    pub fn detached() -> Self {
        Self::from_parts(Settings::default(), PathBuf::new(), LoadOrigin::Detached)
    }

    /// `true` when settings changed since the last successful save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn origin(&self) -> LoadOrigin {
        self.origin
    }

    /// Read-only view of every setting.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Clears the dirty flag.  Called by the store after the document was
    /// written.
    pub(crate) fn mark_saved(&mut self) {
        self.dirty = false;
    }

    bool_accessors! {
        enable_bindings => set_enable_bindings,
        enable_context_menus => set_enable_context_menus,
        enable_advanced_commands => set_enable_advanced_commands,
        auto_checkout_on_edit => set_auto_checkout_on_edit,
        auto_checkout_project => set_auto_checkout_project,
        auto_checkout_on_save => set_auto_checkout_on_save,
        auto_checkout_on_build => set_auto_checkout_on_build,
        auto_add => set_auto_add,
        auto_delete => set_auto_delete,
        use_system_env => set_use_system_env,
        ignore_read_only_on_edit => set_ignore_read_only_on_edit,
        prefer_visual_client => set_prefer_visual_client,
    }

    text_accessors! {
        port => set_port,
        client => set_client,
        username => set_username,
        main_line_path => set_main_line_path,
    }

    /// Reads one setting by identifier.
    pub fn get(&self, setting: Setting) -> SettingValue {
        self.settings.value(setting)
    }

    /// Writes one setting by identifier and marks the config dirty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KindMismatch`] if `value` is not of the
    /// setting's kind.  The config is left untouched in that case.
    pub fn set(
        &mut self,
        setting: Setting,
        value: impl Into<SettingValue>,
    ) -> Result<(), ConfigError> {
        let mismatch = || ConfigError::KindMismatch {
            key: setting.key(),
            expected: setting.kind(),
        };

        match value.into() {
            SettingValue::Bool(v) => *self.settings.bool_slot(setting).ok_or_else(mismatch)? = v,
            SettingValue::Text(v) => *self.settings.text_slot(setting).ok_or_else(mismatch)? = v,
        }
        self.dirty = true;
        Ok(())
    }

    /// Parses `raw` for the setting's kind and writes it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unparseable boolean.
    pub fn set_from_str(&mut self, setting: Setting, raw: &str) -> Result<(), ConfigError> {
        let value = setting.parse_value(raw)?;
        self.set(setting, value)
    }

    /// Restores every setting to its default and marks the config dirty.
    pub fn reset_to_defaults(&mut self) {
        self.settings = Settings::default();
        self.dirty = true;
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::detached()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::setting::SettingKind;

    fn clean_config() -> Config {
        Config::from_parts(
            Settings::default(),
            "/tmp/settings.toml",
            LoadOrigin::Document,
        )
    }

    #[test]
    fn test_config_from_document_starts_clean() {
        // Arrange / Act
        let cfg = clean_config();

        // Assert
        assert!(!cfg.is_dirty());
        assert_eq!(cfg.file_path(), Path::new("/tmp/settings.toml"));
        assert_eq!(cfg.origin(), LoadOrigin::Document);
    }

    #[test]
    fn test_defaulted_configs_start_dirty() {
        for origin in [LoadOrigin::Missing, LoadOrigin::Recovered, LoadOrigin::Detached] {
            let cfg = Config::from_parts(Settings::default(), "/tmp/x.toml", origin);
            assert!(cfg.is_dirty(), "{origin:?} must start dirty");
        }
    }

    #[test]
    fn test_typed_setter_marks_dirty_and_stores_value() {
        // Arrange
        let mut cfg = clean_config();

        // Act
        cfg.set_port("1666");

        // Assert
        assert!(cfg.is_dirty());
        assert_eq!(cfg.port(), "1666");
        assert!(cfg.use_system_env());
    }

    #[test]
    fn test_every_setting_marks_dirty_even_with_same_value() {
        for setting in Setting::ALL {
            // Arrange
            let mut cfg = clean_config();
            let current = cfg.get(setting);

            // Act: write back the value that is already there
            cfg.set(setting, current.clone()).expect("same kind");

            // Assert
            assert!(cfg.is_dirty(), "{setting} must mark dirty");
            assert_eq!(cfg.get(setting), current);
        }
    }

    #[test]
    fn test_typed_bool_setters_mark_dirty() {
        let setters: [fn(&mut Config, bool); 12] = [
            Config::set_enable_bindings,
            Config::set_enable_context_menus,
            Config::set_enable_advanced_commands,
            Config::set_auto_checkout_on_edit,
            Config::set_auto_checkout_project,
            Config::set_auto_checkout_on_save,
            Config::set_auto_checkout_on_build,
            Config::set_auto_add,
            Config::set_auto_delete,
            Config::set_use_system_env,
            Config::set_ignore_read_only_on_edit,
            Config::set_prefer_visual_client,
        ];
        for set in setters {
            let mut cfg = clean_config();
            set(&mut cfg, false);
            assert!(cfg.is_dirty());
        }
    }

    #[test]
    fn test_typed_text_setters_accept_empty_string() {
        let mut cfg = clean_config();
        cfg.set_client("");
        assert!(cfg.is_dirty());
        assert_eq!(cfg.client(), "");

        let mut cfg = clean_config();
        cfg.set_username(String::from("jdoe"));
        cfg.set_main_line_path("//depot/main/...");
        assert_eq!(cfg.username(), "jdoe");
        assert_eq!(cfg.main_line_path(), "//depot/main/...");
    }

    #[test]
    fn test_set_rejects_wrong_kind_without_marking_dirty() {
        // Arrange
        let mut cfg = clean_config();

        // Act
        let result = cfg.set(Setting::AutoAdd, "yes");

        // Assert
        assert!(matches!(
            result,
            Err(ConfigError::KindMismatch {
                key: "autoAdd",
                expected: SettingKind::Bool
            })
        ));
        assert!(!cfg.is_dirty());
        assert!(!cfg.auto_add());
    }

    #[test]
    fn test_set_from_str_parses_bool() {
        let mut cfg = clean_config();
        cfg.set_from_str(Setting::AutoCheckoutOnSave, "on").unwrap();
        assert!(cfg.auto_checkout_on_save());
        assert!(cfg.is_dirty());
    }

    #[test]
    fn test_set_from_str_invalid_bool_leaves_config_clean() {
        let mut cfg = clean_config();
        let result = cfg.set_from_str(Setting::UseSystemEnv, "sometimes");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        assert!(!cfg.is_dirty());
        assert!(cfg.use_system_env());
    }

    #[test]
    fn test_reset_to_defaults_restores_values_and_marks_dirty() {
        // Arrange
        let mut cfg = Config::from_parts(
            Settings {
                auto_add: true,
                port: "1666".to_string(),
                ..Settings::default()
            },
            "/tmp/settings.toml",
            LoadOrigin::Document,
        );

        // Act
        cfg.reset_to_defaults();

        // Assert
        assert_eq!(cfg.settings(), &Settings::default());
        assert!(cfg.is_dirty());
    }

    #[test]
    fn test_mark_saved_clears_dirty() {
        let mut cfg = clean_config();
        cfg.set_auto_delete(true);
        cfg.mark_saved();
        assert!(!cfg.is_dirty());
        assert!(cfg.auto_delete(), "saving must not change values");
    }
}
