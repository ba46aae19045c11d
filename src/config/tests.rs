use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use crate::playlist::RepeatMode;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_segue_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("SEGUE_CONFIG_PATH", "/tmp/segue-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/segue-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("segue")
            .join("config.toml")
    );
}

#[test]
fn default_paths_fall_back_to_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::remove("XDG_STATE_HOME");
    let _g3 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir/.config/segue/config.toml")
    );
    assert_eq!(
        super::default_log_dir().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir/.local/state/segue")
    );
}

#[test]
fn settings_defaults_are_valid() {
    let s = Settings::default();
    assert!(s.validate().is_ok());
    assert!(!s.playback.shuffle);
    assert_eq!(s.playback.repeat, RepeatSetting::Off);
    assert_eq!(s.playback.shuffle_seed, None);
    assert_eq!(s.playback.scrub_seconds, 5);
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(s.library.title_from_filename);
    assert_eq!(s.logging.file_name, "segue.log");
}

#[test]
fn settings_load_from_config_file_and_parse_repeat_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[playback]
shuffle = true
repeat = "repeat-one"
shuffle_seed = 42
scrub_seconds = 9

[library]
extensions = ["mp3", "MP2"]
recursive = false
include_hidden = true
follow_links = false
max_depth = 3
default_dir = "/srv/music"
title_from_filename = false

[ui]
header_text = "hello"
tick_ms = 250

[logging]
level = "segue=debug"
directory = "/tmp/segue-logs"
file_name = "player.log"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SEGUE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("SEGUE__UI__TICK_MS");

    let s = Settings::load().unwrap();
    assert!(s.playback.shuffle);
    assert_eq!(s.playback.repeat, RepeatSetting::One);
    assert_eq!(RepeatMode::from(s.playback.repeat), RepeatMode::One);
    assert_eq!(s.playback.shuffle_seed, Some(42));
    assert_eq!(s.playback.scrub_seconds, 9);
    assert_eq!(s.library.extensions, vec!["mp3".to_string(), "MP2".to_string()]);
    assert!(!s.library.recursive);
    assert!(s.library.include_hidden);
    assert!(!s.library.follow_links);
    assert_eq!(s.library.max_depth, Some(3));
    assert_eq!(
        s.library.default_dir,
        Some(std::path::PathBuf::from("/srv/music"))
    );
    assert!(!s.library.title_from_filename);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.tick_ms, 250);
    assert_eq!(s.logging.level, "segue=debug");
    assert_eq!(
        s.logging.directory,
        Some(std::path::PathBuf::from("/tmp/segue-logs"))
    );
    assert_eq!(s.logging.file_name, "player.log");
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[ui]
tick_ms = 250
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SEGUE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("SEGUE__UI__TICK_MS", "40");

    let s = Settings::load().unwrap();
    assert_eq!(s.ui.tick_ms, 40);
}

#[test]
fn validate_rejects_zero_tick_zero_scrub_and_empty_extensions() {
    let mut s = Settings::default();
    s.ui.tick_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.playback.scrub_seconds = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.library.extensions = vec!["  ".to_string()];
    assert!(s.validate().is_err());
}
