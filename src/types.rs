// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use serde::{Deserialize, Serialize};

/// Scan lifecycle: every report starts `Incomplete` and ends in exactly one
/// of the two terminal states
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ScanStatus {
    #[default]
    Incomplete,
    Completed,
    Failed,
}

impl std::fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ScanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStatus::Incomplete => "Incomplete",
            ScanStatus::Completed => "Completed",
            ScanStatus::Failed => "Failed",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Findings {
    pub open_directory: bool,
    pub outdated_software_indicators: Vec<String>,
    pub exposed_admin_panels: Vec<String>,
    pub general_info: Vec<String>,
}

impl Findings {
    pub fn is_empty(&self) -> bool {
        !self.open_directory
            && self.outdated_software_indicators.is_empty()
            && self.exposed_admin_panels.is_empty()
            && self.general_info.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanReport {
    pub target_url: String,
    pub status: ScanStatus,
    pub findings: Findings,
    pub errors: Vec<String>,
}

impl ScanReport {
    /// Empty report for a scan that has not run yet
    pub fn new(target_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
            status: ScanStatus::Incomplete,
            findings: Findings::default(),
            errors: Vec::new(),
        }
    }

    /// Scan aborted by a main-page fetch failure; no findings
    pub fn failed(target_url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            status: ScanStatus::Failed,
            errors: vec![error.into()],
            ..Self::new(target_url)
        }
    }

    pub fn completed(target_url: impl Into<String>, findings: Findings) -> Self {
        Self {
            status: ScanStatus::Completed,
            findings,
            ..Self::new(target_url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_is_incomplete_and_empty() {
        let report = ScanReport::new("https://example.com");

        assert_eq!(report.status, ScanStatus::Incomplete);
        assert!(report.findings.is_empty());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_failed_report_carries_single_error() {
        let report = ScanReport::failed("https://example.com", "Could not fetch main URL");

        assert_eq!(report.status, ScanStatus::Failed);
        assert_eq!(report.errors, vec!["Could not fetch main URL"]);
        assert!(report.findings.is_empty());
    }

    #[test]
    fn test_status_serializes_by_name() {
        assert_eq!(serde_json::to_string(&ScanStatus::Completed).unwrap(), "\"Completed\"");
        assert_eq!(ScanStatus::Failed.to_string(), "Failed");
    }
}
