//! # Theme Configuration System
//!
//! This module configures the defaults and storage of a
//! [ThemeStore](crate::manager::ThemeStore) through environment variables,
//! TOML files, or programmatically.
//!
//! ## Usage Examples
//!
//! ### Environment Variable Configuration
//!
//! ```bash
//! export FOLIO_THEME=ocean               # theme used when nothing is stored
//! export FOLIO_THEME_SEED="#0EA5E9"      # seed used when nothing is stored
//! export FOLIO_THEME_STORAGE=./theme.json
//! export FOLIO_THEME_CONFIG=./theme.toml # file settings override the above
//! ```
//!
//! ### Programmatic Configuration
//!
//! ```rust
//! use folio_theme::config::ThemeConfig;
//! use folio_theme::id::ThemeId;
//!
//! let config = ThemeConfig::new()
//!     .with_default_theme(ThemeId::Midnight)
//!     .with_default_seed("#6366F1");
//! assert_eq!(config.default_theme, ThemeId::Midnight);
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [theme]
//! default = "ocean"
//! seed = "#0EA5E9"
//! storage = "./theme-state.json"
//!
//! [theme.keys]
//! theme = "portfolio_theme"
//! custom_color = "portfolio_custom_color"
//! custom_theme = "portfolio_custom_theme"
//! ```
//!
//! Every setting is optional; missing ones keep their defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::color::is_hex_color;
use crate::error::{ThemeError, ThemeResult};
use crate::id::ThemeId;
use crate::registry::DEFAULT_SEED_COLOR;
use crate::storage::{FileStorage, MemoryStorage, StorageKeys, ThemeStorage};

/// Defaults and storage settings for a theme store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Theme used when no valid theme is stored.
    pub default_theme: ThemeId,
    /// Seed color used when no valid seed is stored.
    pub default_seed: String,
    /// Keys the three state entries are stored under.
    pub storage_keys: StorageKeys,
    /// JSON file for durable storage. `None` keeps state in memory only.
    pub storage_path: Option<PathBuf>,
}

/// Raw file layout; every field optional so files can be partial.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    theme: ThemeSection,
}

#[derive(Debug, Default, Deserialize)]
struct ThemeSection {
    default: Option<String>,
    seed: Option<String>,
    storage: Option<PathBuf>,
    keys: Option<StorageKeys>,
}

impl ThemeConfig {
    /// Create a configuration with built-in defaults.
    pub fn new() -> Self {
        Self {
            default_theme: ThemeId::Default,
            default_seed: DEFAULT_SEED_COLOR.to_string(),
            storage_keys: StorageKeys::default(),
            storage_path: None,
        }
    }

    /// Create a configuration from environment variables or use defaults.
    ///
    /// Reads `FOLIO_THEME`, `FOLIO_THEME_SEED`, `FOLIO_THEME_STORAGE` and
    /// `FOLIO_THEME_CONFIG`. Invalid values are logged and ignored.
    pub fn from_env_or_default() -> Self {
        let mut config = Self::new();

        if let Ok(theme) = env::var("FOLIO_THEME") {
            match theme.parse() {
                Ok(id) => config.default_theme = id,
                Err(e) => log::warn!("Ignoring FOLIO_THEME: {}", e),
            }
        }

        if let Ok(seed) = env::var("FOLIO_THEME_SEED") {
            if is_hex_color(&seed) {
                config.default_seed = seed;
            } else {
                log::warn!("Ignoring FOLIO_THEME_SEED: '{}' is not a hex color", seed);
            }
        }

        if let Ok(path) = env::var("FOLIO_THEME_STORAGE") {
            config.storage_path = Some(PathBuf::from(path));
        }

        if let Ok(config_path) = env::var("FOLIO_THEME_CONFIG") {
            // Only settings present in the file override the environment.
            let path = Path::new(&config_path);
            let loaded = Self::read_section(path).and_then(|section| {
                config
                    .apply_section(section)
                    .map_err(|details| ThemeError::config_parse(path, details))
            });
            if let Err(e) = loaded {
                log::warn!("Failed to load theme config {:?}: {}", config_path, e);
            }
        }

        config
    }

    /// Load a configuration from a `.toml` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        let section = Self::read_section(path)?;
        let mut config = Self::new();
        config
            .apply_section(section)
            .map_err(|details| ThemeError::config_parse(path, details))?;
        Ok(config)
    }

    /// Load a configuration from TOML content.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        let mut config = Self::new();
        parse_section(content)
            .and_then(|section| config.apply_section(section))
            .map_err(|details| ThemeError::config_parse("<inline>", details))?;
        Ok(config)
    }

    fn read_section(path: &Path) -> ThemeResult<ThemeSection> {
        if path.extension().and_then(|s| s.to_str()) != Some("toml") {
            return Err(ThemeError::config_parse(
                path,
                "Unsupported configuration file format. Use .toml",
            ));
        }

        log::info!("Loading theme config from: {:?}", path);
        let content = fs::read_to_string(path)?;
        parse_section(&content).map_err(|details| ThemeError::config_parse(path, details))
    }

    /// Overlay the settings present in `section`. Nothing changes on error.
    fn apply_section(&mut self, section: ThemeSection) -> Result<(), String> {
        let mut next = self.clone();

        if let Some(default) = section.default {
            next.default_theme = default.parse().map_err(|e: ThemeError| e.to_string())?;
        }
        if let Some(seed) = section.seed {
            if !is_hex_color(&seed) {
                return Err(ThemeError::invalid_hex(seed).to_string());
            }
            next.default_seed = seed;
        }
        if let Some(keys) = section.keys {
            next.storage_keys = keys;
        }
        if let Some(storage) = section.storage {
            next.storage_path = Some(storage);
        }

        *self = next;
        Ok(())
    }

    /// Set the theme used when nothing valid is stored.
    pub fn with_default_theme(mut self, theme: ThemeId) -> Self {
        self.default_theme = theme;
        self
    }

    /// Set the seed used when nothing valid is stored.
    pub fn with_default_seed(mut self, seed: impl Into<String>) -> Self {
        self.default_seed = seed.into();
        self
    }

    /// Set the storage keys.
    pub fn with_storage_keys(mut self, keys: StorageKeys) -> Self {
        self.storage_keys = keys;
        self
    }

    /// Persist state to a JSON file.
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    /// Overlay another configuration; its non-default settings win.
    ///
    /// A setting equal to its built-in default counts as unset here. Loading
    /// `FOLIO_THEME_CONFIG` does not go through this and honors every setting
    /// the file names.
    pub fn merge(&mut self, other: ThemeConfig) {
        let defaults = Self::new();
        if other.default_theme != defaults.default_theme {
            self.default_theme = other.default_theme;
        }
        if other.default_seed != defaults.default_seed {
            self.default_seed = other.default_seed;
        }
        if other.storage_keys != defaults.storage_keys {
            self.storage_keys = other.storage_keys;
        }
        if other.storage_path.is_some() {
            self.storage_path = other.storage_path;
        }
    }

    /// Open the configured storage backend.
    pub fn open_storage(&self) -> Box<dyn ThemeStorage> {
        match &self.storage_path {
            Some(path) => Box::new(FileStorage::open(path)),
            None => Box::new(MemoryStorage::new()),
        }
    }
}

fn parse_section(content: &str) -> Result<ThemeSection, String> {
    let file: ConfigFile = toml::from_str(content).map_err(|e| e.to_string())?;
    Ok(file.theme)
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.default_theme, ThemeId::Default);
        assert_eq!(config.default_seed, "#8B5CF6");
        assert_eq!(config.storage_path, None);
    }

    #[test]
    fn parse_full_toml() {
        let config = ThemeConfig::from_toml(
            r##"
            [theme]
            default = "ocean"
            seed = "#0EA5E9"
            storage = "./state.json"

            [theme.keys]
            theme = "t"
            custom_color = "c"
            custom_theme = "p"
            "##,
        )
        .unwrap();

        assert_eq!(config.default_theme, ThemeId::Ocean);
        assert_eq!(config.default_seed, "#0EA5E9");
        assert_eq!(config.storage_path, Some(PathBuf::from("./state.json")));
        assert_eq!(config.storage_keys.theme, "t");
        assert_eq!(config.storage_keys.custom_color, "c");
        assert_eq!(config.storage_keys.custom_theme, "p");
    }

    #[test]
    fn partial_keys_keep_defaults() {
        let config = ThemeConfig::from_toml(
            r#"
            [theme.keys]
            theme = "site_theme"
            "#,
        )
        .unwrap();
        assert_eq!(config.storage_keys.theme, "site_theme");
        assert_eq!(config.storage_keys.custom_color, "portfolio_custom_color");
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(ThemeConfig::from_toml("").unwrap(), ThemeConfig::new());
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(matches!(
            ThemeConfig::from_toml("[theme]\ndefault = \"neon\""),
            Err(ThemeError::ConfigParse { .. })
        ));
        assert!(ThemeConfig::from_toml("[theme]\nseed = \"blue\"").is_err());
        assert!(ThemeConfig::from_toml("[theme\n").is_err());
    }

    #[test]
    fn from_file_requires_toml_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        fs::write(&path, "{}").unwrap();
        assert!(ThemeConfig::from_file(&path).is_err());

        let path = dir.path().join("theme.toml");
        fs::write(&path, "[theme]\ndefault = \"forest\"\n").unwrap();
        assert_eq!(ThemeConfig::from_file(&path).unwrap().default_theme, ThemeId::Forest);
    }

    // Tests touching process environment variables take this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_VARS: [&str; 4] = [
        "FOLIO_THEME",
        "FOLIO_THEME_SEED",
        "FOLIO_THEME_STORAGE",
        "FOLIO_THEME_CONFIG",
    ];

    fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        for name in ENV_VARS {
            env::remove_var(name);
        }
        for (name, value) in vars {
            env::set_var(name, value);
        }
        let result = f();
        for name in ENV_VARS {
            env::remove_var(name);
        }
        result
    }

    #[test]
    fn env_overrides_defaults() {
        let config = with_env(
            &[
                ("FOLIO_THEME", "Nebula"),
                ("FOLIO_THEME_SEED", "#0EA5E9"),
                ("FOLIO_THEME_STORAGE", "/tmp/folio-theme.json"),
            ],
            ThemeConfig::from_env_or_default,
        );
        assert_eq!(config.default_theme, ThemeId::Nebula);
        assert_eq!(config.default_seed, "#0EA5E9");
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/folio-theme.json")));
    }

    #[test]
    fn invalid_env_values_are_ignored() {
        let config = with_env(
            &[("FOLIO_THEME", "neon"), ("FOLIO_THEME_SEED", "purple")],
            ThemeConfig::from_env_or_default,
        );
        assert_eq!(config, ThemeConfig::new());
    }

    #[test]
    fn config_file_overrides_env_even_with_default_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        fs::write(
            &path,
            "[theme]\ndefault = \"default\"\nseed = \"#8B5CF6\"\n",
        )
        .unwrap();

        let config = with_env(
            &[
                ("FOLIO_THEME", "ocean"),
                ("FOLIO_THEME_SEED", "#0EA5E9"),
                ("FOLIO_THEME_STORAGE", "/tmp/env.json"),
                ("FOLIO_THEME_CONFIG", path.to_str().unwrap()),
            ],
            ThemeConfig::from_env_or_default,
        );
        assert_eq!(config.default_theme, ThemeId::Default);
        assert_eq!(config.default_seed, "#8B5CF6");
        // Not named in the file, so the environment value stays.
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/env.json")));
    }

    #[test]
    fn broken_config_file_keeps_env_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        fs::write(&path, "[theme]\ndefault = \"light\"\nseed = \"blue\"\n").unwrap();

        let config = with_env(
            &[
                ("FOLIO_THEME", "forest"),
                ("FOLIO_THEME_CONFIG", path.to_str().unwrap()),
            ],
            ThemeConfig::from_env_or_default,
        );
        assert_eq!(config.default_theme, ThemeId::Forest);
        assert_eq!(config.default_seed, "#8B5CF6");
    }

    #[test]
    fn merge_prefers_explicit_settings() {
        let mut base = ThemeConfig::new()
            .with_default_theme(ThemeId::Light)
            .with_storage_path("/tmp/a.json");
        base.merge(ThemeConfig::new().with_default_seed("#123456"));

        assert_eq!(base.default_theme, ThemeId::Light);
        assert_eq!(base.default_seed, "#123456");
        assert_eq!(base.storage_path, Some(PathBuf::from("/tmp/a.json")));
    }
}
