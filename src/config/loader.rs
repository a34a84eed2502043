// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::core::ScannerConfig;
use super::validation::ConfigValidator;

pub const ENV_TIMEOUT: &str = "PAGESCOUT_TIMEOUT";
pub const ENV_USER_AGENT: &str = "PAGESCOUT_USER_AGENT";

pub struct ConfigLoader {
    config_path: PathBuf,
    format: ConfigFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
    Json,
}

impl ConfigLoader {
    pub fn new<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let path = config_path.as_ref().to_path_buf();
        let format = Self::detect_format(&path)?;

        Ok(Self {
            config_path: path,
            format,
        })
    }

    pub fn with_format<P: AsRef<Path>>(config_path: P, format: ConfigFormat) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            format,
        }
    }

    fn detect_format(path: &Path) -> Result<ConfigFormat> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| anyhow::anyhow!("Could not determine config file format"))?;

        match extension {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "toml" => Ok(ConfigFormat::Toml),
            "json" => Ok(ConfigFormat::Json),
            _ => Err(anyhow::anyhow!("Unsupported config file format: {}", extension)),
        }
    }

    /// Read the file, apply environment overrides and validate
    pub fn load_config(&self) -> Result<ScannerConfig> {
        let content = std::fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config file: {:?}", self.config_path))?;

        let mut config = self.parse(&content)?;

        apply_overrides(&mut config, |key| std::env::var(key).ok())?;

        ConfigValidator::validate_scanner_config(&config)?;

        debug!("Loaded configuration from {:?}", self.config_path);
        Ok(config)
    }

    fn parse(&self, content: &str) -> Result<ScannerConfig> {
        let config: ScannerConfig = match self.format {
            ConfigFormat::Yaml => {
                serde_yaml::from_str(content).context("Failed to parse YAML config")?
            }
            ConfigFormat::Toml => toml::from_str(content).context("Failed to parse TOML config")?,
            ConfigFormat::Json => {
                serde_json::from_str(content).context("Failed to parse JSON config")?
            }
        };
        Ok(config)
    }
}

/// Configuration for a run: the file when one is given, built-in defaults
/// otherwise. Environment overrides apply in both cases.
pub fn load_config_with_overrides(config_path: Option<&Path>) -> Result<ScannerConfig> {
    match config_path {
        Some(path) => ConfigLoader::new(path)?.load_config(),
        None => {
            let mut config = ScannerConfig::default();
            apply_overrides(&mut config, |key| std::env::var(key).ok())?;
            ConfigValidator::validate_scanner_config(&config)?;
            Ok(config)
        }
    }
}

/// Apply `PAGESCOUT_*` overrides read through `lookup`
pub fn apply_overrides<F>(config: &mut ScannerConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(timeout) = lookup(ENV_TIMEOUT) {
        config.timeout_secs = timeout
            .trim()
            .parse()
            .with_context(|| format!("Invalid {}", ENV_TIMEOUT))?;
    }

    if let Some(user_agent) = lookup(ENV_USER_AGENT) {
        config.user_agent = user_agent;
    }

    Ok(())
}
