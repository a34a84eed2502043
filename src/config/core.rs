// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use serde::{Deserialize, Serialize};

/// Desktop Chrome on Windows; some sites block requests without a browser UA
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Redirect hops followed before a request fails
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Well-known administrative and login paths, probed in this order
pub const DEFAULT_ADMIN_PATHS: &[&str] = &[
    "/admin",
    "/administrator",
    "/login",
    "/wp-admin",
    "/dashboard",
    "/cpanel",
    "/phpmyadmin",
    "/webmail",
    "/user/login",
    "/panel",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerConfig {
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    #[serde(default = "default_admin_paths")]
    pub admin_paths: Vec<String>,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_max_redirects() -> usize {
    DEFAULT_MAX_REDIRECTS
}

fn default_admin_paths() -> Vec<String> {
    DEFAULT_ADMIN_PATHS.iter().map(|p| p.to_string()).collect()
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
            max_redirects: default_max_redirects(),
            admin_paths: default_admin_paths(),
        }
    }
}

impl ScannerConfig {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}
