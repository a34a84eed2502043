// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Text Report Generator
 * Human-readable console report for a single scan
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use crate::types::ScanReport;

pub struct TextReportGenerator;

impl TextReportGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, report: &ScanReport) -> String {
        let mut out = String::new();
        let findings = &report.findings;

        out.push_str("\n--- Scan Results ---\n");
        out.push_str(&format!("Target URL: {}\n", report.target_url));
        out.push_str(&format!("Scan Status: {}\n", report.status));

        out.push_str("\n[+] General Information:\n");
        for info in &findings.general_info {
            out.push_str(&format!("    - {}\n", info));
        }

        out.push_str("\n[+] Potential Vulnerability Indicators:\n");
        if findings.open_directory {
            out.push_str("    - **OPEN DIRECTORY DETECTED!** This could expose sensitive files.\n");
        } else {
            out.push_str("    - No obvious open directory listing detected on main URL.\n");
        }

        if findings.outdated_software_indicators.is_empty() {
            out.push_str("    - No clear outdated software indicators found.\n");
        } else {
            out.push_str("    - **OUTDATED SOFTWARE INDICATORS FOUND:**\n");
            for indicator in &findings.outdated_software_indicators {
                out.push_str(&format!("        - {}\n", indicator));
            }
            out.push_str("      (Outdated software can lead to known vulnerabilities.)\n");
        }

        if findings.exposed_admin_panels.is_empty() {
            out.push_str("    - No common admin panel paths found to be directly accessible.\n");
        } else {
            out.push_str("    - **EXPOSED ADMIN PANELS/LOGIN PAGES FOUND:**\n");
            for panel in &findings.exposed_admin_panels {
                out.push_str(&format!("        - {}\n", panel));
            }
            out.push_str("      (Publicly accessible admin panels increase attack surface.)\n");
        }

        if !report.errors.is_empty() {
            out.push_str("\n[!] Errors during scan:\n");
            for error in &report.errors {
                out.push_str(&format!("    - {}\n", error));
            }
        }

        out.push_str("\n--- Scan Complete ---\n");
        out
    }
}

impl Default for TextReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
