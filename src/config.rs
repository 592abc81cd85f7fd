use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::export::OutputFormat;
use crate::logging::LogConfig;
use crate::models::MessageLocale;

/// Environment variable overriding the configuration file location
pub const CONFIG_ENV_VAR: &str = "STRIDECALC_CONFIG";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// How workout summaries are written
    pub output: OutputSettings,

    /// Logging setup
    pub logging: LogConfig,

    /// Sensor package checks applied before dispatch
    pub validation: ValidationSettings,
}

/// Output preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    /// Default output format
    pub format: OutputFormat,

    /// Language of the text summary line
    pub locale: MessageLocale,
}

/// Validation applied to imported and command-line packages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationSettings {
    /// Reject packages with non-positive duration, height or pool length
    pub strict: bool,

    /// Keep processing remaining packages after one fails
    pub continue_on_error: bool,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            strict: true,
            continue_on_error: true,
        }
    }
}

/// Configuration management implementation
impl AppConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: AppConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML configuration")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml_content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration to TOML")?;

        fs::write(&path, toml_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Get default configuration file path
    pub fn default_config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("stridecalc")
            .join("config.toml")
    }

    /// Load configuration with fallback to defaults
    ///
    /// Only the default location may be absent. A path given explicitly must
    /// exist, and any file that exists must parse.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(explicit) => Self::load_from_file(explicit),
            None => Self::load_for_update(&Self::default_config_path()),
        }
    }

    /// Load the configuration that `config --set` is about to rewrite
    ///
    /// A missing file yields the defaults so the first write creates it.
    pub fn load_for_update(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        Self::load_from_file(path)
    }

    /// Read a setting by dotted key, e.g. `output.format`
    pub fn get_value(&self, key: &str) -> Result<String> {
        let root = toml::Value::try_from(self)?;

        let mut current = &root;
        for part in key.split('.') {
            current = current
                .get(part)
                .ok_or_else(|| anyhow!("Unknown configuration key: {}", key))?;
        }

        Ok(match current {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Update a setting by dotted key from its textual value
    pub fn set_value(&mut self, key: &str, raw: &str) -> Result<()> {
        let mut root = toml::Value::try_from(&*self)?;

        let (section, leaf) = key
            .rsplit_once('.')
            .ok_or_else(|| anyhow!("Configuration key must be section.name: {}", key))?;

        let mut table = root
            .as_table_mut()
            .ok_or_else(|| anyhow!("Configuration root is not a table"))?;
        for part in section.split('.') {
            table = table
                .get_mut(part)
                .and_then(toml::Value::as_table_mut)
                .ok_or_else(|| anyhow!("Unknown configuration section: {}", section))?;
        }
        table.insert(leaf.to_string(), parse_setting(raw));

        *self = root
            .try_into()
            .with_context(|| format!("Invalid value for {}: {}", key, raw))?;
        Ok(())
    }
}

/// Interpret a command-line value as a TOML scalar, falling back to a string
fn parse_setting(raw: &str) -> toml::Value {
    toml::from_str::<toml::Table>(&format!("value = {}", raw))
        .ok()
        .and_then(|mut table| table.remove("value"))
        .unwrap_or_else(|| toml::Value::String(raw.to_string()))
}
