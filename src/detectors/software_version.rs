// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Software Version Indicators
 * Generator meta tags, version strings in page text, and ?ver= parameters
 * on linked scripts and stylesheets
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use std::fmt;

use super::document_text;

static GENERATOR_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"meta[name="generator"]"#).unwrap()
});

static RESOURCE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("script, link").unwrap());

/// Text patterns, tried in order. Versions are one to four numeric
/// components.
static TEXT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)powered by (wordpress|joomla|drupal|magento) v?\d+(?:\.\d+){0,3}",
        r"(?i)version \d+(?:\.\d+){0,3}",
        r"(?i)apache/\d+(?:\.\d+){0,3}",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// e.g. /wp-includes/css/dashicons.min.css?ver=5.8.1
static VER_PARAM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"ver=(\d+\.\d+(?:\.\d+)?)").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionIndicator {
    /// `content` of `<meta name="generator">`, verbatim
    GeneratorTag { content: String },
    /// Full text matched by one of the text patterns
    TextPattern { matched: String },
    /// Resource URL carrying a `ver=` query parameter
    ResourceParameter { url: String, version: String },
}

impl fmt::Display for VersionIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionIndicator::GeneratorTag { content } => {
                write!(f, "Potential software identified via meta tag: {}", content)
            }
            VersionIndicator::TextPattern { matched } => {
                write!(f, "Potential software version found in text: {}", matched)
            }
            VersionIndicator::ResourceParameter { url, version } => write!(
                f,
                "Potential version parameter in resource URL: {} (version: {})",
                url, version
            ),
        }
    }
}

/// All indicators: generator tag, then text patterns in pattern order,
/// then resource parameters in document order. Nothing is deduplicated.
pub fn detect_versions(document: &Html) -> Vec<VersionIndicator> {
    let mut indicators = Vec::new();

    indicators.extend(generator_indicator(document));
    indicators.extend(text_pattern_indicators(&document_text(document)));
    indicators.extend(resource_version_indicators(document));

    indicators
}

/// Only the first generator tag is consulted
pub fn generator_indicator(document: &Html) -> Option<VersionIndicator> {
    let meta = document.select(&GENERATOR_SELECTOR).next()?;
    let content = meta.value().attr("content")?;

    Some(VersionIndicator::GeneratorTag {
        content: content.to_string(),
    })
}

/// First match of each text pattern in `text`
pub fn text_pattern_indicators(text: &str) -> Vec<VersionIndicator> {
    TEXT_PATTERNS
        .iter()
        .filter_map(|pattern| pattern.find(text))
        .map(|m| VersionIndicator::TextPattern {
            matched: m.as_str().to_string(),
        })
        .collect()
}

/// `src` when present and non-empty, otherwise `href`
pub fn resource_version_indicators(document: &Html) -> Vec<VersionIndicator> {
    let mut indicators = Vec::new();

    for element in document.select(&RESOURCE_SELECTOR) {
        let attrs = element.value();
        let reference = attrs
            .attr("src")
            .filter(|src| !src.is_empty())
            .or_else(|| attrs.attr("href"));

        let Some(url) = reference.filter(|url| !url.is_empty()) else {
            continue;
        };

        if let Some(caps) = VER_PARAM_PATTERN.captures(url) {
            indicators.push(VersionIndicator::ResourceParameter {
                url: url.to_string(),
                version: caps[1].to_string(),
            });
        }
    }

    indicators
}
