// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[sidebar]` - Initial collapse state and mobile breakpoint
//! - `[notifications]` - Default toast duration and optional cap
//! - `[diagnostics]` - Event buffer size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. `--config-dir` on the command line
//! 3. `SHELFWISE_CONFIG_DIR` environment variable
//! 4. The platform config directory
//!
//! # Examples
//!
//! ```no_run
//! use shelfwise::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::diagnostics::BufferCapacity;
use crate::domain::ui::{MobileBreakpoint, ToastCapacity, ToastDuration};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when the config file cannot be read.
pub const LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Navigation sidebar settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SidebarConfig {
    /// Start with the narrow rail on desktop.
    #[serde(default = "default_start_collapsed")]
    pub start_collapsed: bool,

    /// Window width (logical pixels) below which the mobile layout is used.
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: u32,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            start_collapsed: DEFAULT_START_COLLAPSED,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
        }
    }
}

impl SidebarConfig {
    #[must_use]
    pub fn breakpoint(&self) -> MobileBreakpoint {
        MobileBreakpoint::new(self.mobile_breakpoint)
    }
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Duration used when a toast is enqueued without one.
    #[serde(default = "default_toast_duration_ms")]
    pub default_duration_ms: u64,

    /// Maximum simultaneous toasts; oldest are dropped first. Unbounded if absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_active: Option<usize>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: DEFAULT_TOAST_DURATION_MS,
            max_active: None,
        }
    }
}

impl NotificationsConfig {
    #[must_use]
    pub fn default_duration(&self) -> ToastDuration {
        ToastDuration::from_millis(self.default_duration_ms)
    }

    #[must_use]
    pub fn capacity(&self) -> Option<ToastCapacity> {
        self.max_active.map(ToastCapacity::new)
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    #[serde(default = "default_diagnostics_buffer")]
    pub buffer_capacity: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_DIAGNOSTICS_BUFFER,
        }
    }
}

impl DiagnosticsConfig {
    #[must_use]
    pub fn capacity(&self) -> BufferCapacity {
        BufferCapacity::new(self.buffer_capacity)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub sidebar: SidebarConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_start_collapsed() -> bool {
    DEFAULT_START_COLLAPSED
}

fn default_mobile_breakpoint() -> u32 {
    DEFAULT_MOBILE_BREAKPOINT
}

fn default_toast_duration_ms() -> u64 {
    DEFAULT_TOAST_DURATION_MS
}

fn default_diagnostics_buffer() -> usize {
    DEFAULT_DIAGNOSTICS_BUFFER
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns the config and, if the file existed but could not be read, the
/// i18n key of a warning to show. A missing file is not an error.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (Config::default(), Some(LOAD_WARNING_KEY.to_string())),
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match get_config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config("no config directory available".to_string())),
    }
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            sidebar: SidebarConfig {
                start_collapsed: true,
                mobile_breakpoint: 900,
            },
            notifications: NotificationsConfig {
                default_duration_ms: 4500,
                max_active: Some(5),
            },
            diagnostics: DiagnosticsConfig {
                buffer_capacity: 200,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[sidebar]\nstart_collapsed = true\n").expect("write");

        let loaded = load_from_path(&config_path).expect("partial config loads");
        assert!(loaded.sidebar.start_collapsed);
        assert_eq!(loaded.sidebar.mobile_breakpoint, DEFAULT_MOBILE_BREAKPOINT);
        assert_eq!(loaded.notifications, NotificationsConfig::default());
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn load_with_override_reports_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_WARNING_KEY));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = temp_dir.path().join("cfg");

        save_with_override(&Config::default(), Some(dir.clone())).expect("save");
        assert!(dir.join(CONFIG_FILE).exists());
    }

    #[test]
    fn out_of_range_values_are_clamped_by_accessors() {
        let config = Config {
            sidebar: SidebarConfig {
                start_collapsed: false,
                mobile_breakpoint: 10,
            },
            notifications: NotificationsConfig {
                default_duration_ms: 0,
                max_active: Some(0),
            },
            diagnostics: DiagnosticsConfig { buffer_capacity: 1 },
            ..Config::default()
        };

        assert_eq!(config.sidebar.breakpoint().value(), 320);
        assert_eq!(config.notifications.default_duration().millis(), 100);
        assert_eq!(config.notifications.capacity().map(ToastCapacity::value), Some(1));
        assert_eq!(config.diagnostics.capacity().value(), 50);
    }

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert!(config.general.language.is_none());
        assert!(!config.sidebar.start_collapsed);
        assert_eq!(config.sidebar.mobile_breakpoint, 768);
        assert_eq!(config.notifications.default_duration_ms, 3000);
        assert!(config.notifications.max_active.is_none());
    }
}
