//! Command handlers.
//!
//! Each run loads the document once, which publishes it as the process-wide
//! current configuration; handlers then reach it only through
//! [`p4cfg_core::current`] and persist through [`p4cfg_core::save_current`],
//! the same way an editor host would.

use std::io::Write;
use std::path::Path;
use std::sync::{MutexGuard, PoisonError};

use anyhow::Context;
use p4cfg_core::{by_category, Config, SaveOutcome, Setting, SharedConfig};
use tracing::info;

use crate::Command;

/// Executes `command` against the document at `path`, writing output to `out`.
///
/// # Errors
///
/// Returns an error for unknown keys, invalid values, failed saves, or
/// failed writes to `out`.
pub(crate) fn run(command: &Command, path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    if *command == Command::Path {
        writeln!(out, "{}", path.display())?;
        return Ok(());
    }

    p4cfg_core::load(path);
    let handle = p4cfg_core::current().context("configuration was not published after load")?;

    {
        let mut cfg = lock(&handle);

        match command {
            Command::Path => {}
            Command::Show { json: false } => show(&cfg, out)?,
            Command::Show { json: true } => {
                serde_json::to_writer_pretty(&mut *out, cfg.settings())?;
                writeln!(out)?;
            }
            Command::Get { key } => {
                let setting: Setting = key.parse()?;
                writeln!(out, "{}", cfg.get(setting))?;
            }
            Command::Set { key, value } => {
                let setting: Setting = key.parse()?;
                cfg.set_from_str(setting, value)?;
                writeln!(out, "{setting} = {}", cfg.get(setting))?;
            }
            Command::Reset => cfg.reset_to_defaults(),
            Command::Describe => describe(&cfg, out)?,
        }
    }

    // Read-only commands never save, even when defaults stand in for a
    // missing document.
    if matches!(command, Command::Set { .. } | Command::Reset) {
        let outcome = p4cfg_core::save_current()
            .with_context(|| format!("failed to save settings to {}", path.display()))?;
        if outcome == SaveOutcome::Written {
            info!("settings written to {}", path.display());
        }
    }
    Ok(())
}

/// Locks the shared config, recovering it if a previous holder panicked.
fn lock(handle: &SharedConfig) -> MutexGuard<'_, Config> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}

fn show(cfg: &Config, out: &mut impl Write) -> std::io::Result<()> {
    for setting in Setting::ALL {
        writeln!(out, "{setting} = {}", cfg.get(setting))?;
    }
    Ok(())
}

fn describe(cfg: &Config, out: &mut impl Write) -> std::io::Result<()> {
    for (index, (category, members)) in by_category().into_iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "[{category}]")?;
        for d in members {
            writeln!(
                out,
                "  {:<24} {:<8} {}",
                d.setting.key(),
                cfg.get(d.setting).to_string(),
                d.display_name
            )?;
            writeln!(out, "      {}", d.description)?;
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    /// `run` publishes into the process-wide slot.
    fn serial() -> MutexGuard<'static, ()> {
        static LOCK: Mutex<()> = Mutex::new(());
        LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn scratch_file() -> PathBuf {
        std::env::temp_dir()
            .join(format!("p4cfg_cli_{}", Uuid::new_v4()))
            .join("settings.toml")
    }

    fn cleanup(path: &Path) {
        if let Some(dir) = path.parent() {
            std::fs::remove_dir_all(dir).ok();
        }
    }

    fn run_to_string(command: Command, path: &Path) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run(&command, path, &mut out)?;
        Ok(String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn test_lock_recovers_poisoned_config() {
        // Arrange: a holder panics while the guard is live
        let handle: SharedConfig = Arc::new(Mutex::new(Config::detached()));
        let poisoner = Arc::clone(&handle);
        let _ = std::thread::spawn(move || {
            let mut cfg = poisoner.lock().unwrap();
            cfg.set_port("1666");
            panic!("holder died");
        })
        .join();
        assert!(handle.is_poisoned());

        // Act
        let cfg = lock(&handle);

        // Assert
        assert_eq!(cfg.port(), "1666");
    }

    #[test]
    fn test_path_prints_path_without_touching_disk() {
        // Arrange
        let _guard = serial();
        let path = scratch_file();

        // Act
        let output = run_to_string(Command::Path, &path).unwrap();

        // Assert
        assert_eq!(output.trim(), path.display().to_string());
        assert!(!path.exists());
    }

    #[test]
    fn test_show_on_missing_file_prints_defaults_and_writes_nothing() {
        let _guard = serial();
        let path = scratch_file();

        let output = run_to_string(Command::Show { json: false }, &path).unwrap();

        assert!(output.contains("useSystemEnv = true"), "got:\n{output}");
        assert!(output.contains("autoAdd = false"));
        assert_eq!(output.lines().count(), Setting::ALL.len());
        assert!(!path.exists(), "read-only commands must not save");
    }

    #[test]
    fn test_set_saves_and_get_reads_back() {
        // Arrange
        let _guard = serial();
        let path = scratch_file();

        // Act
        let set_output = run_to_string(
            Command::Set {
                key: "port".to_string(),
                value: "1666".to_string(),
            },
            &path,
        )
        .unwrap();
        let get_output = run_to_string(
            Command::Get {
                key: "port".to_string(),
            },
            &path,
        )
        .unwrap();

        // Assert
        assert_eq!(set_output.trim(), "port = 1666");
        assert_eq!(get_output.trim(), "1666");
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains("port = \"1666\""));
        cleanup(&path);
    }

    #[test]
    fn test_set_bool_with_snake_case_key() {
        let _guard = serial();
        let path = scratch_file();

        run_to_string(
            Command::Set {
                key: "auto_checkout_on_edit".to_string(),
                value: "yes".to_string(),
            },
            &path,
        )
        .unwrap();

        let output = run_to_string(
            Command::Get {
                key: "autoCheckoutOnEdit".to_string(),
            },
            &path,
        )
        .unwrap();
        assert_eq!(output.trim(), "true");
        cleanup(&path);
    }

    #[test]
    fn test_set_unknown_key_fails_without_saving() {
        let _guard = serial();
        let path = scratch_file();

        let result = run_to_string(
            Command::Set {
                key: "warnOnEditNewerFile".to_string(),
                value: "true".to_string(),
            },
            &path,
        );

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_set_invalid_bool_fails() {
        let _guard = serial();
        let path = scratch_file();

        let result = run_to_string(
            Command::Set {
                key: "autoAdd".to_string(),
                value: "sometimes".to_string(),
            },
            &path,
        );

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("sometimes"), "got: {message}");
    }

    #[test]
    fn test_reset_writes_defaults() {
        let _guard = serial();
        let path = scratch_file();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "autoAdd = true\nport = \"1666\"\n").unwrap();

        run_to_string(Command::Reset, &path).unwrap();

        let reloaded = p4cfg_core::ConfigStore::new(p4cfg_core::FileStorage).read(&path);
        assert_eq!(reloaded.settings(), &p4cfg_core::Settings::default());
        assert!(!reloaded.is_dirty());
        cleanup(&path);
    }

    #[test]
    fn test_show_json_is_object_with_every_key() {
        let _guard = serial();
        let path = scratch_file();

        let output = run_to_string(Command::Show { json: true }, &path).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let object = value.as_object().expect("json object");
        assert_eq!(object.len(), Setting::ALL.len());
        assert_eq!(object["useSystemEnv"], serde_json::Value::Bool(true));
        assert_eq!(object["port"], serde_json::Value::String(String::new()));
    }

    #[test]
    fn test_describe_groups_by_category() {
        let _guard = serial();
        let path = scratch_file();

        let output = run_to_string(Command::Describe, &path).unwrap();

        let general = output.find("[General]").expect("general header");
        let operation = output.find("[Operation]").expect("operation header");
        let connection = output.find("[Connection]").expect("connection header");
        let branching = output.find("[Branching]").expect("branching header");
        assert!(general < operation && operation < connection && connection < branching);
        assert!(output.contains("Use system settings"));
        assert!(output.contains("mainLinePath"));
    }
}
