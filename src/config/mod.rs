// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

pub mod core;
pub mod loader;
pub mod validation;

pub use core::{
    ScannerConfig, DEFAULT_ADMIN_PATHS, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};

pub use loader::{apply_overrides, load_config_with_overrides, ConfigFormat, ConfigLoader};

pub use validation::ConfigValidator;
