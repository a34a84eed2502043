// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Open directory listing heuristics.
//!
//! Matches the auto-index pages Apache and Nginx render for directories
//! without an index file. A page that merely quotes "Index of /" is a false
//! positive, and a customised listing template is a false negative.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

use super::page_title;

static INDEX_OF_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Index of /").unwrap()
});

/// Column header of the Apache/Nginx fancy index
static LISTING_HEADER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Name\s+Last modified\s+Size\s+Description").unwrap()
});

static PRE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("pre").unwrap());

/// True when any listing heuristic fires
pub fn is_open_directory(document: &Html) -> bool {
    title_indicates_listing(document)
        || text_indicates_listing(document)
        || pre_shows_listing_header(document)
}

pub fn title_indicates_listing(document: &Html) -> bool {
    page_title(document)
        .map(|title| title.to_lowercase().contains("index of /"))
        .unwrap_or(false)
}

/// Any single text node containing "Index of /"
pub fn text_indicates_listing(document: &Html) -> bool {
    document
        .root_element()
        .text()
        .any(|text| INDEX_OF_PATTERN.is_match(text))
}

pub fn pre_shows_listing_header(document: &Html) -> bool {
    document.select(&PRE_SELECTOR).any(|pre| {
        let text: String = pre.text().collect();
        LISTING_HEADER_PATTERN.is_match(&text)
    })
}
