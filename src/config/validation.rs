// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use anyhow::Result;

use super::core::ScannerConfig;

/// Upper bound on the per-request timeout, in seconds
const MAX_TIMEOUT_SECS: u64 = 300;

/// Upper bound on followed redirects
const MAX_REDIRECT_LIMIT: usize = 20;

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate_scanner_config(config: &ScannerConfig) -> Result<()> {
        Self::validate_http_settings(config)?;
        Self::validate_admin_paths(config)?;
        Ok(())
    }

    fn validate_http_settings(config: &ScannerConfig) -> Result<()> {
        if config.timeout_secs == 0 {
            return Err(anyhow::anyhow!("Request timeout must be greater than 0"));
        }

        if config.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(anyhow::anyhow!(
                "Request timeout must not exceed {} seconds",
                MAX_TIMEOUT_SECS
            ));
        }

        if config.user_agent.trim().is_empty() {
            return Err(anyhow::anyhow!("User-Agent cannot be empty"));
        }

        if config.max_redirects > MAX_REDIRECT_LIMIT {
            return Err(anyhow::anyhow!(
                "Redirect limit must not exceed {}",
                MAX_REDIRECT_LIMIT
            ));
        }

        Ok(())
    }

    fn validate_admin_paths(config: &ScannerConfig) -> Result<()> {
        if config.admin_paths.is_empty() {
            return Err(anyhow::anyhow!("At least one admin path is required"));
        }

        for path in &config.admin_paths {
            if !path.starts_with('/') {
                return Err(anyhow::anyhow!(
                    "Admin path must start with '/': {}",
                    path
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate_scanner_config(&ScannerConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = ScannerConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(ConfigValidator::validate_scanner_config(&config).is_err());
    }

    #[test]
    fn test_rejects_blank_user_agent() {
        let config = ScannerConfig {
            user_agent: "   ".to_string(),
            ..Default::default()
        };
        assert!(ConfigValidator::validate_scanner_config(&config).is_err());
    }

    #[test]
    fn test_rejects_relative_admin_path() {
        let config = ScannerConfig {
            admin_paths: vec!["/admin".to_string(), "login".to_string()],
            ..Default::default()
        };

        let err = ConfigValidator::validate_scanner_config(&config).unwrap_err();
        assert!(err.to_string().contains("login"));
    }

    #[test]
    fn test_rejects_empty_admin_paths() {
        let config = ScannerConfig {
            admin_paths: Vec::new(),
            ..Default::default()
        };
        assert!(ConfigValidator::validate_scanner_config(&config).is_err());
    }
}
