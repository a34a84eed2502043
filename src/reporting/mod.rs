// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

pub mod formats;

use anyhow::Result;

use crate::types::ScanReport;
use formats::json::JsonReportGenerator;
use formats::text::TextReportGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Render `report` in the requested format
pub fn render(report: &ScanReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(TextReportGenerator::new().generate(report)),
        ReportFormat::Json => JsonReportGenerator::new().generate(report),
    }
}
