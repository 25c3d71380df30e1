use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::{CONFIG_ENV, DATE_OVERRIDE_ENV, DEBUG_ENV};

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) date_override: Option<String>,
    #[serde(default)]
    pub(crate) advance_override: bool,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
}

impl Config {
    /// Config file (first readable candidate), then environment on top.
    pub(crate) fn load() -> Self {
        let mut config = Self::load_file();
        config.apply_env(
            std::env::var(DEBUG_ENV).ok().as_deref(),
            std::env::var(DATE_OVERRIDE_ENV).ok().as_deref(),
        );
        config
    }

    fn load_file() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            if let Some(config) = Self::load_from(&path) {
                tracing::debug!(path = %path.display(), "loaded config");
                return config;
            }
        }

        Self::default()
    }

    /// Parse one file; unreadable or invalid files are skipped with a warning.
    pub(crate) fn load_from(path: &Path) -> Option<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read config");
                return None;
            }
        };
        match toml::from_str::<Config>(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to parse config");
                None
            }
        }
    }

    /// Environment values sit between the config file and CLI flags.
    pub(crate) fn apply_env(&mut self, debug: Option<&str>, date_override: Option<&str>) {
        if let Some(flag) = debug.and_then(parse_bool_flag) {
            self.debug = flag;
        }
        if let Some(raw) = date_override.map(str::trim).filter(|s| !s.is_empty()) {
            self.date_override = Some(raw.to_string());
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 0. Explicit file from $DATEKEEPER_CONFIG
        if let Some(explicit) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            paths.push(PathBuf::from(explicit));
        }

        // 1. XDG config: ~/.config/datekeeper/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("datekeeper").join("config.toml"));
        }

        // 2. macOS Application Support: ~/Library/Application Support/datekeeper/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let macos_path = config_dir.join("datekeeper").join("config.toml");
            if !paths.contains(&macos_path) {
                paths.push(macos_path);
            }
        }

        // 3. Home directory: ~/.datekeeper.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".datekeeper.toml"));
        }

        paths
    }
}

fn parse_bool_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
