//! Persistent CLI settings.
//!
//! Settings live in a flat JSON object at
//! `<config dir>/shockwave/config.json`. `SHOCKWAVE_CONFIG_DIR` replaces the
//! `<config dir>/shockwave` part. Command-line flags always win over stored
//! values.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Environment variable overriding the settings directory.
pub const CONFIG_DIR_ENV: &str = "SHOCKWAVE_CONFIG_DIR";

/// CLI configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Default output format
    DefaultFormat,
    /// Scenario used when `--scenario` is omitted
    DefaultScenario,
    /// Number of risk contributors shown by `analyze`
    TopAssets,
    /// Scenario catalog file replacing the built-in scenarios
    CatalogPath,
    /// Whether to use colors
    UseColors,
}

impl ConfigKey {
    /// Resolves a key name or alias.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default_format" | "format" => Some(Self::DefaultFormat),
            "default_scenario" | "scenario" => Some(Self::DefaultScenario),
            "top_assets" | "top" => Some(Self::TopAssets),
            "catalog_path" | "catalog" => Some(Self::CatalogPath),
            "use_colors" | "colors" => Some(Self::UseColors),
            _ => None,
        }
    }

    /// Canonical key name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "default_format",
            Self::DefaultScenario => "default_scenario",
            Self::TopAssets => "top_assets",
            Self::CatalogPath => "catalog_path",
            Self::UseColors => "use_colors",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "Default output format (table, json, csv, markdown, minimal)",
            Self::DefaultScenario => "Scenario id used when --scenario is omitted",
            Self::TopAssets => "Number of top risk contributors to show (1-100)",
            Self::CatalogPath => "Scenario catalog file (.json or .toml); empty for built-in",
            Self::UseColors => "Enable colored output (true, false)",
        }
    }

    pub fn default_value(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "table",
            Self::DefaultScenario => "",
            Self::TopAssets => "5",
            Self::CatalogPath => "",
            Self::UseColors => "true",
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::DefaultFormat,
            Self::DefaultScenario,
            Self::TopAssets,
            Self::CatalogPath,
            Self::UseColors,
        ]
    }
}

/// Stored settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(flatten)]
    values: BTreeMap<String, String>,
}

impl Settings {
    /// Loads the settings file, or defaults when it does not exist.
    pub fn load() -> CliResult<Self> {
        let path = config_path()?;
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Self::from_json(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses settings, rejecting unknown keys and invalid values.
    pub fn from_json(content: &str) -> CliResult<Self> {
        let settings: Self = serde_json::from_str(content)
            .map_err(|e| CliError::Config(format!("malformed settings file: {e}")))?;
        for (key, value) in &settings.values {
            let known = ConfigKey::from_str(key)
                .filter(|k| k.as_str() == key)
                .ok_or_else(|| CliError::Config(format!("unknown key in settings file: {key}")))?;
            validate_config_value(known, value)?;
        }
        Ok(settings)
    }

    /// Writes the settings file, creating its directory.
    pub fn save(&self) -> CliResult<()> {
        let path = config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| CliError::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Stored value or the key's default.
    pub fn value(&self, key: ConfigKey) -> &str {
        self.values
            .get(key.as_str())
            .map(String::as_str)
            .unwrap_or(key.default_value())
    }

    pub fn set(&mut self, key: ConfigKey, value: impl Into<String>) {
        self.values.insert(key.as_str().to_string(), value.into());
    }

    pub fn remove(&mut self, key: ConfigKey) {
        self.values.remove(key.as_str());
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Effective output format.
    pub fn default_format(&self) -> CliResult<OutputFormat> {
        let raw = self.value(ConfigKey::DefaultFormat);
        OutputFormat::parse(raw).ok_or_else(|| CliError::Config(format!("invalid format: {raw}")))
    }

    /// Configured default scenario, if any.
    pub fn default_scenario(&self) -> Option<&str> {
        Some(self.value(ConfigKey::DefaultScenario)).filter(|s| !s.is_empty())
    }

    /// Number of risk contributors to show.
    pub fn top_assets(&self) -> usize {
        self.value(ConfigKey::TopAssets).parse().unwrap_or(5)
    }

    /// Configured catalog file, if any.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        Some(self.value(ConfigKey::CatalogPath))
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }

    pub fn use_colors(&self) -> bool {
        parse_bool(self.value(ConfigKey::UseColors)).unwrap_or(true)
    }
}

/// Get the config file path.
pub fn config_path() -> CliResult<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir).join("config.json"));
    }
    let home = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| CliError::Config("could not determine config directory".into()))?;
    Ok(home.join("shockwave").join("config.json"))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Validate a configuration value.
pub fn validate_config_value(key: ConfigKey, value: &str) -> CliResult<()> {
    match key {
        ConfigKey::DefaultFormat => {
            if OutputFormat::parse(value).is_none() {
                return Err(CliError::Config(format!(
                    "Invalid format: {}. Use {}.",
                    value,
                    OutputFormat::NAMES.join(", ")
                )));
            }
        }
        ConfigKey::DefaultScenario => {
            if value.chars().any(char::is_whitespace) {
                return Err(CliError::Config(format!(
                    "Invalid scenario id: {:?}. Ids contain no spaces.",
                    value
                )));
            }
        }
        ConfigKey::TopAssets => {
            let count: usize = value
                .parse()
                .map_err(|_| CliError::Config(format!("Invalid count: {}. Must be a number.", value)))?;
            if !(1..=100).contains(&count) {
                return Err(CliError::Config(format!(
                    "Invalid count: {}. Must be between 1 and 100.",
                    count
                )));
            }
        }
        ConfigKey::CatalogPath => {
            let lower = value.to_lowercase();
            if !value.is_empty() && !lower.ends_with(".json") && !lower.ends_with(".toml") {
                return Err(CliError::Config(format!(
                    "Invalid catalog path: {}. Use a .json or .toml file.",
                    value
                )));
            }
        }
        ConfigKey::UseColors => {
            if parse_bool(value).is_none() {
                return Err(CliError::Config(format!(
                    "Invalid boolean: {}. Use true or false.",
                    value
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_aliases() {
        assert_eq!(ConfigKey::from_str("format"), Some(ConfigKey::DefaultFormat));
        assert_eq!(ConfigKey::from_str("TOP"), Some(ConfigKey::TopAssets));
        assert_eq!(ConfigKey::from_str("default_currency"), None);
        for key in ConfigKey::all() {
            assert_eq!(ConfigKey::from_str(key.as_str()), Some(*key));
            validate_config_value(*key, key.default_value()).unwrap();
        }
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.default_format().unwrap(), OutputFormat::Table);
        assert_eq!(settings.default_scenario(), None);
        assert_eq!(settings.top_assets(), 5);
        assert_eq!(settings.catalog_path(), None);
        assert!(settings.use_colors());
    }

    #[test]
    fn test_from_json() {
        let settings = Settings::from_json(
            r#"{"default_format": "json", "top_assets": "3", "use_colors": "no"}"#,
        )
        .unwrap();
        assert_eq!(settings.default_format().unwrap(), OutputFormat::Json);
        assert_eq!(settings.top_assets(), 3);
        assert!(!settings.use_colors());
    }

    #[test]
    fn test_from_json_rejects_unknown_and_invalid() {
        assert!(matches!(
            Settings::from_json(r#"{"default_currency": "USD"}"#),
            Err(CliError::Config(_))
        ));
        assert!(Settings::from_json(r#"{"top_assets": "0"}"#).is_err());
        assert!(Settings::from_json("not json").is_err());
    }

    #[test]
    fn test_validate_values() {
        assert!(validate_config_value(ConfigKey::DefaultFormat, "markdown").is_ok());
        assert!(validate_config_value(ConfigKey::DefaultFormat, "yaml").is_err());
        assert!(validate_config_value(ConfigKey::CatalogPath, "/tmp/cat.TOML").is_ok());
        assert!(validate_config_value(ConfigKey::CatalogPath, "/tmp/cat.yaml").is_err());
        assert!(validate_config_value(ConfigKey::DefaultScenario, "market crash").is_err());
        assert!(validate_config_value(ConfigKey::TopAssets, "101").is_err());
        assert!(validate_config_value(ConfigKey::UseColors, "maybe").is_err());
    }

    #[test]
    fn test_set_and_remove() {
        let mut settings = Settings::default();
        settings.set(ConfigKey::DefaultScenario, "rate-hike");
        assert_eq!(settings.default_scenario(), Some("rate-hike"));
        settings.remove(ConfigKey::DefaultScenario);
        assert_eq!(settings.default_scenario(), None);
        settings.set(ConfigKey::TopAssets, "8");
        settings.clear();
        assert_eq!(settings, Settings::default());
    }
}
