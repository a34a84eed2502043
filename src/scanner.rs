// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Page Security Scanner
 * Main-page fetch, directory listing and version heuristics, admin path
 * probing; composed into one ScanReport
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use anyhow::Result;
use scraper::Html;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::ScannerConfig;
use crate::detectors::{self, VersionIndicator};
use crate::fetcher::{self, Transport};
use crate::http_client::{HttpClient, HttpResponse};
use crate::prober::AdminPathProber;
use crate::types::{Findings, ScanReport};

const OPEN_DIRECTORY_NOTE: &str = "Detected potential open directory listing on main URL.";

/// Everything learned from the main page body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAnalysis {
    pub title: Option<String>,
    pub status_code: u16,
    pub open_directory: bool,
    pub version_indicators: Vec<VersionIndicator>,
}

impl PageAnalysis {
    /// Parse the body once and run every page heuristic on it
    pub fn from_response(response: &HttpResponse) -> Self {
        let document = Html::parse_document(&response.body);

        Self {
            title: detectors::page_title(&document),
            status_code: response.status_code,
            open_directory: detectors::is_open_directory(&document),
            version_indicators: detectors::detect_versions(&document),
        }
    }

    /// `Title: ...` and `HTTP Status Code: ...`, plus the open directory
    /// note when the listing heuristic fired
    pub fn general_info(&self) -> Vec<String> {
        let mut info = vec![
            format!("Title: {}", self.title.as_deref().unwrap_or("N/A")),
            format!("HTTP Status Code: {}", self.status_code),
        ];
        if self.open_directory {
            info.push(OPEN_DIRECTORY_NOTE.to_string());
        }
        info
    }
}

pub struct SecurityScanner {
    transport: Arc<dyn Transport>,
    prober: AdminPathProber,
}

impl SecurityScanner {
    pub fn new(transport: Arc<dyn Transport>, config: &ScannerConfig) -> Self {
        let prober = AdminPathProber::new(transport.clone(), config.admin_paths.clone());
        Self { transport, prober }
    }

    /// Scanner backed by a real HTTP client built from `config`
    pub fn from_config(config: &ScannerConfig) -> Result<Self> {
        let client = HttpClient::new(config)?;
        Ok(Self::new(Arc::new(client), config))
    }

    /// Run the full pipeline against `target_url`. Only a failed main-page
    /// fetch ends the scan early.
    pub async fn scan(&self, target_url: &str) -> ScanReport {
        info!("Starting security scan for: {}", target_url);

        let response = match fetcher::fetch_page(self.transport.as_ref(), target_url).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Scan of {} failed: {}", target_url, e);
                return ScanReport::failed(
                    target_url,
                    format!("Could not fetch main URL: {} ({})", target_url, e),
                );
            }
        };

        // The parsed document is dropped here, before the probes are awaited
        let page = PageAnalysis::from_response(&response);
        let exposed_admin_panels = self.prober.probe(target_url).await;

        info!(
            "Scan of {} completed: open_directory={}, {} version indicators, {} admin paths",
            target_url,
            page.open_directory,
            page.version_indicators.len(),
            exposed_admin_panels.len()
        );

        ScanReport::completed(target_url, compose_findings(&page, exposed_admin_panels))
    }
}

/// Combine the per-stage results into report findings
pub fn compose_findings(page: &PageAnalysis, exposed_admin_panels: Vec<String>) -> Findings {
    Findings {
        open_directory: page.open_directory,
        outdated_software_indicators: page
            .version_indicators
            .iter()
            .map(|indicator| indicator.to_string())
            .collect(),
        exposed_admin_panels,
        general_info: page.general_info(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::stub::StubTransport;
    use crate::types::ScanStatus;

    const WORDPRESS_HOME: &str = r#"<html><head>
<title>My Blog</title>
<meta name="generator" content="WordPress 5.8">
<script src="/wp-includes/x.js?ver=5.8.1"></script>
</head><body><p>Hello world</p></body></html>"#;

    fn config_with_paths(paths: &[&str]) -> ScannerConfig {
        ScannerConfig {
            admin_paths: paths.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_failed_main_fetch_fails_the_scan() {
        let transport = Arc::new(StubTransport::new());
        let scanner = SecurityScanner::new(transport.clone(), &config_with_paths(&["/admin"]));

        let report = scanner.scan("https://down.example").await;

        assert_eq!(report.status, ScanStatus::Failed);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("https://down.example"));
        assert!(report.findings.is_empty());
        // no probes after the main fetch failed
        assert_eq!(transport.requested(), vec!["https://down.example"]);
    }

    #[tokio::test]
    async fn test_error_status_on_main_page_fails_the_scan() {
        let transport = Arc::new(StubTransport::new().with_page("https://example.com", 404, ""));
        let scanner = SecurityScanner::new(transport, &config_with_paths(&["/admin"]));

        let report = scanner.scan("https://example.com").await;

        assert_eq!(report.status, ScanStatus::Failed);
        assert!(report.errors[0].contains("404"));
    }

    #[tokio::test]
    async fn test_completed_scan_composes_all_stages() {
        let transport = Arc::new(
            StubTransport::new()
                .with_page("https://example.com", 200, WORDPRESS_HOME)
                .with_page("https://example.com/wp-admin", 200, "login"),
        );
        let scanner =
            SecurityScanner::new(transport, &config_with_paths(&["/admin", "/wp-admin"]));

        let report = scanner.scan("https://example.com").await;

        assert_eq!(report.status, ScanStatus::Completed);
        assert!(report.errors.is_empty());
        assert!(!report.findings.open_directory);
        assert_eq!(
            report.findings.general_info,
            vec!["Title: My Blog", "HTTP Status Code: 200"]
        );
        assert_eq!(report.findings.outdated_software_indicators.len(), 2);
        assert!(report.findings.outdated_software_indicators[0].contains("WordPress 5.8"));
        assert!(report.findings.outdated_software_indicators[1].contains("5.8.1"));
        assert_eq!(
            report.findings.exposed_admin_panels,
            vec!["https://example.com/wp-admin"]
        );
    }

    #[tokio::test]
    async fn test_open_directory_adds_general_info_note() {
        let transport = Arc::new(StubTransport::new().with_page(
            "http://files.example.com/pub/",
            200,
            "<html><head><title>Index of /pub</title></head><body></body></html>",
        ));
        let scanner = SecurityScanner::new(transport, &config_with_paths(&["/admin"]));

        let report = scanner.scan("http://files.example.com/pub/").await;

        assert!(report.findings.open_directory);
        assert_eq!(
            report.findings.general_info,
            vec![
                "Title: Index of /pub",
                "HTTP Status Code: 200",
                "Detected potential open directory listing on main URL.",
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_title_is_reported_as_na() {
        let transport =
            Arc::new(StubTransport::new().with_page("https://example.com", 200, "<p>plain</p>"));
        let scanner = SecurityScanner::new(transport, &config_with_paths(&["/admin"]));

        let report = scanner.scan("https://example.com").await;

        assert_eq!(report.findings.general_info[0], "Title: N/A");
    }

    #[tokio::test]
    async fn test_repeated_scans_are_identical() {
        let transport = Arc::new(
            StubTransport::new()
                .with_page("https://example.com", 200, WORDPRESS_HOME)
                .with_page("https://example.com/login", 200, ""),
        );
        let scanner =
            SecurityScanner::new(transport, &config_with_paths(&["/admin", "/login"]));

        let first = scanner.scan("https://example.com").await;
        let second = scanner.scan("https://example.com").await;

        assert_eq!(first, second);
    }
}
