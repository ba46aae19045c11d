use std::{env, path::PathBuf};

use ::config::{Config, ConfigError, Environment, File};

use super::schema::Settings;

/// Prefix for per-key overrides, e.g. `SEGUE__PLAYBACK__REPEAT=all`.
const ENV_PREFIX: &str = "SEGUE";
/// Points at a config file outside the XDG locations.
const CONFIG_PATH_VAR: &str = "SEGUE_CONFIG_PATH";

impl Settings {
    /// Build settings from three layers, lowest first: struct defaults, the
    /// TOML file (if one exists), then `SEGUE__*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = resolve_config_path() {
            builder = builder.add_source(File::from(path.as_path()).required(false));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Reject values the player cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.playback.scrub_seconds == 0 {
            return Err("playback.scrub_seconds must be >= 1".to_string());
        }
        if self.ui.tick_ms == 0 {
            return Err("ui.tick_ms must be >= 1".to_string());
        }
        if self.library.extensions.iter().all(|e| e.trim().is_empty()) {
            return Err("library.extensions must name at least one extension".to_string());
        }
        Ok(())
    }
}

/// `$SEGUE_CONFIG_PATH` when set, otherwise the XDG config file.
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `segue/config.toml` under the XDG config home.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config").map(|d| d.join("segue").join("config.toml"))
}

/// `segue/` under the XDG state home; log files live here.
pub fn default_log_dir() -> Option<PathBuf> {
    xdg_dir("XDG_STATE_HOME", ".local/state").map(|d| d.join("segue"))
}

/// `$var` if set, else `$HOME/<home_fallback>`.
fn xdg_dir(var: &str, home_fallback: &str) -> Option<PathBuf> {
    env::var_os(var)
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(home_fallback)))
}
