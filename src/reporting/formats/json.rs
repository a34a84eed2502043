// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use crate::types::ScanReport;
use anyhow::{Context, Result};

pub struct JsonReportGenerator;

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, report: &ScanReport) -> Result<String> {
        serde_json::to_string_pretty(report).context("Failed to serialize scan report")
    }
}

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
