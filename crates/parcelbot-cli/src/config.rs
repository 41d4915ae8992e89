//! Configuration management for the CLI.
//!
//! One explicit configuration struct, constructed at startup from the config
//! file plus environment and flag overrides, then passed by reference into
//! whatever needs it. Nothing reads the environment after startup.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use parcelbot_llm::gemini::DEFAULT_MODEL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the tab-separated tracking dataset
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    /// Model identifier to request from the provider
    #[serde(default = "default_model")]
    pub model: String,

    /// Provider API key; the environment/flag override wins over the file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".parcelbot").join("config.toml"))
    }

    /// Load configuration from the given file, or the default location, or
    /// fall back to defaults when no file exists.
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        let path = match explicit_path {
            Some(p) => PathBuf::from(p),
            None => Self::path()?,
        };

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else if explicit_path.is_some() {
            // An explicitly named file that is missing is an error; the
            // default location silently falls back to defaults.
            Err(CliError::Config(format!(
                "Config file not found: {}",
                path.display()
            )))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {e}")))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Fold command-line (and environment, via clap) overrides into the
    /// loaded configuration.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(dataset) = &cli.dataset {
            self.dataset_path = dataset.clone();
        }
        if let Some(model) = &cli.model {
            self.model = model.clone();
        }
        if let Some(api_key) = &cli.api_key {
            self.api_key = Some(api_key.clone());
        }
        if cli.no_color {
            self.color = false;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            model: default_model(),
            api_key: None,
            color: true,
        }
    }
}

fn default_dataset_path() -> String {
    "tracking_codes.csv".to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.dataset_path, "tracking_codes.csv");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.api_key.is_none());
        assert!(config.color);
    }

    #[test]
    fn test_load_explicit_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "dataset_path = \"data/codes.tsv\"\nmodel = \"gemini-1.5-flash\"").unwrap();

        let config = Config::load(tmp.path().to_str()).unwrap();
        assert_eq!(config.dataset_path, "data/codes.tsv");
        assert_eq!(config.model, "gemini-1.5-flash");
        // Unspecified keys fall back to serde defaults
        assert!(config.color);
    }

    #[test]
    fn test_load_missing_explicit_file_is_an_error() {
        let result = Config::load(Some("/nonexistent/parcelbot.toml"));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_cli_overrides_win() {
        let cli = Cli::parse_from([
            "parcelbot",
            "--dataset",
            "override.tsv",
            "--model",
            "gemini-1.5-pro",
            "--no-color",
        ]);

        let mut config = Config::default();
        config.apply_overrides(&cli);

        assert_eq!(config.dataset_path, "override.tsv");
        assert_eq!(config.model, "gemini-1.5-pro");
        assert!(!config.color);
    }
}
