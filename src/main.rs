// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - PageScout
 * Interactive single-page web reconnaissance
 *
 * Features:
 * - Open directory listing detection
 * - Software version fingerprints (generator tags, page text, ?ver= assets)
 * - Exposed admin and login path probing
 * - Text and JSON reports
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use pagescout::config::load_config_with_overrides;
use pagescout::reporting::{self, ReportFormat};
use pagescout::scanner::SecurityScanner;
use pagescout::target::{has_http_scheme, normalize_target};

/// PageScout - basic website security indicators
#[derive(Parser)]
#[command(name = "pagescout")]
#[command(author = "Bountyy Oy <info@bountyy.fi>")]
#[command(version)]
#[command(about = "Fetches one page and reports basic security indicators", long_about = None)]
struct Cli {
    /// Target URL(s) to scan once; without this an interactive prompt is started
    #[arg(short, long)]
    url: Vec<String>,

    /// Report format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Configuration file path (toml, yaml or json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Quiet mode - only print reports
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

const PROMPT: &str = "\nEnter the URL to scan (e.g., https://example.com) or 'exit' to quit: ";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        Level::TRACE
    } else if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    // Reports go to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_level.to_string())),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = load_config_with_overrides(cli.config.as_deref())?;
    let scanner = SecurityScanner::from_config(&config)?;
    let format = ReportFormat::from(cli.format);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build async runtime")?;

    let scan = |target: &str| {
        let report = runtime.block_on(scanner.scan(target));
        reporting::render(&report, format)
    };

    if !cli.url.is_empty() {
        for target in &cli.url {
            println!("{}", scan(&normalize_target(target))?);
        }
        return Ok(());
    }

    let stdin = io::stdin();
    run_interactive(stdin.lock(), io::stdout(), scan)
}

/// Prompt for targets on `input` until `exit` or EOF. `scan` receives the
/// normalized target and returns the rendered report.
fn run_interactive<R, W, F>(input: R, mut output: W, mut scan: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> Result<String>,
{
    writeln!(output, "Welcome to the Basic Website Security Scraper!")?;
    writeln!(
        output,
        "Note: This is a simple tool for educational purposes and provides basic indicators."
    )?;
    writeln!(output, "It does not perform deep vulnerability scanning.")?;

    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        // EOF ends the session like `exit`
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read from stdin")?;
        let line = line.trim();

        if line.eq_ignore_ascii_case("exit") {
            break;
        }
        if line.is_empty() {
            writeln!(output, "Please enter a URL.")?;
            continue;
        }
        if !has_http_scheme(line) {
            writeln!(
                output,
                "Warning: URL missing scheme (http:// or https://). Attempting with https://"
            )?;
        }

        writeln!(output, "{}", scan(&normalize_target(line))?)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Run the loop over `input`, returning the output and the scanned targets
    fn session(input: &str) -> (String, Vec<String>) {
        let mut output = Vec::new();
        let mut scanned = Vec::new();

        run_interactive(Cursor::new(input), &mut output, |target| {
            scanned.push(target.to_string());
            Ok(format!("report for {}", target))
        })
        .unwrap();

        (String::from_utf8(output).unwrap(), scanned)
    }

    #[test]
    fn test_exit_is_case_insensitive_and_trimmed() {
        let (output, scanned) = session("\n EXIT \nexample.com\n");

        assert!(scanned.is_empty());
        assert!(output.starts_with("Welcome to the Basic Website Security Scraper!\n"));
        assert_eq!(output.matches(PROMPT).count(), 2);
    }

    #[test]
    fn test_empty_input_reprompts() {
        let (output, scanned) = session("\n   \nexit\n");

        assert!(scanned.is_empty());
        assert_eq!(output.matches("Please enter a URL.\n").count(), 2);
        assert_eq!(output.matches(PROMPT).count(), 3);
    }

    #[test]
    fn test_missing_scheme_warns_and_uses_https() {
        let (output, scanned) = session("example.com\nexit\n");

        assert_eq!(scanned, vec!["https://example.com"]);
        assert!(output.contains(
            "Warning: URL missing scheme (http:// or https://). Attempting with https://\n"
        ));
        assert!(output.contains("report for https://example.com\n"));
    }

    #[test]
    fn test_http_target_is_scanned_unchanged() {
        let (output, scanned) = session("  http://example.com/a  \nexit\n");

        assert_eq!(scanned, vec!["http://example.com/a"]);
        assert!(!output.contains("Warning: URL missing scheme"));
    }

    #[test]
    fn test_eof_ends_the_session() {
        let (output, scanned) = session("example.com\nhttps://second.example");

        assert_eq!(scanned, vec!["https://example.com", "https://second.example"]);
        assert_eq!(output.matches(PROMPT).count(), 3);
    }
}
