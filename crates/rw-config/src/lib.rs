//! Configuration management for RW.
//!
//! Parses `rw.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Sections
//!
//! - `[theme]` - header navigation, repository link and locale switcher texts
//! - `[locales."<prefix>"]` - site locales keyed by path prefix, in file order
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `theme.repo`
//! - `theme.repo_label`

mod expand;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rw_navbar::{LocaleDescriptor, LocaleMap, NavbarConfig, RawNavItem};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override repository reference.
    pub repo: Option<String>,
    /// Override repository link label.
    pub repo_label: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "rw.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme configuration.
    pub theme: ThemeConfig,
    /// Locale tables keyed by path prefix (as parsed from TOML).
    locales: IndexMap<String, LocaleConfigRaw>,

    /// Resolved locales (set after loading).
    #[serde(skip)]
    pub locales_resolved: LocaleMap,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Theme configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Header navigation records.
    pub nav: Vec<RawNavItem>,
    /// Repository reference (`owner/repo` or URL).
    pub repo: Option<String>,
    /// Explicit repository link label.
    pub repo_label: Option<String>,
    /// Locale switcher text.
    pub select_text: Option<String>,
    /// Locale switcher accessible label.
    pub aria_label: Option<String>,
}

impl ThemeConfig {
    /// Header settings for [`rw_navbar::Navbar::build`].
    #[must_use]
    pub fn navbar_config(&self) -> NavbarConfig {
        NavbarConfig {
            nav: self.nav.clone(),
            repo: self.repo.clone(),
            repo_label: self.repo_label.clone(),
            select_text: self.select_text.clone(),
            aria_label: self.aria_label.clone(),
        }
    }
}

/// Raw locale table as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LocaleConfigRaw {
    lang: Option<String>,
    label: Option<String>,
    select_text: Option<String>,
    aria_label: Option<String>,
    nav: Option<Vec<RawNavItem>>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`theme.repo`").
        field: String,
        /// Error message (e.g., "${`REPO`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a locale prefix to start and end with `/`.
fn require_locale_prefix(prefix: &str) -> Result<(), ConfigError> {
    if !prefix.starts_with('/') || !prefix.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "locale prefix \"{prefix}\" must start and end with /"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `rw.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(repo) = &settings.repo {
            self.theme.repo = Some(repo.clone());
        }
        if let Some(repo_label) = &settings.repo_label {
            self.theme.repo_label = Some(repo_label.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.resolve_locales()?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (prefix, locale) in &self.locales_resolved {
            require_locale_prefix(prefix)?;
            require_non_empty(&locale.language_tag, &format!("locales.\"{prefix}\".lang"))?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_env_opt(&mut self.theme.repo, "theme.repo")?;
        expand::expand_env_opt(&mut self.theme.repo_label, "theme.repo_label")?;
        Ok(())
    }

    /// Resolve raw locale tables into locale descriptors.
    ///
    /// Every locale requires `lang`.
    fn resolve_locales(&mut self) -> Result<(), ConfigError> {
        self.locales_resolved = self
            .locales
            .iter()
            .map(|(prefix, raw)| {
                let language_tag = raw.lang.clone().ok_or_else(|| {
                    ConfigError::Validation(format!(
                        "[locales.\"{prefix}\"] section requires lang to be set"
                    ))
                })?;
                let locale = LocaleDescriptor {
                    path_prefix: prefix.clone(),
                    language_tag,
                    display_label: raw.label.clone(),
                    select_text: raw.select_text.clone(),
                    aria_label: raw.aria_label.clone(),
                    nav: raw.nav.clone(),
                };
                Ok((prefix.clone(), locale))
            })
            .collect::<Result<_, ConfigError>>()?;
        Ok(())
    }
}
