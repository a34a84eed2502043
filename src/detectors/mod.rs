// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Page Heuristics
 * Pure functions over a parsed document; none of them perform I/O
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

pub mod directory_listing;
pub mod software_version;

pub use directory_listing::is_open_directory;
pub use software_version::{detect_versions, VersionIndicator};

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());

/// Text of the first `<title>` element, untrimmed
pub fn page_title(document: &Html) -> Option<String> {
    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|title| title.text().collect())
}

/// Every text node of the document concatenated in document order,
/// script and style bodies included
pub fn document_text(document: &Html) -> String {
    document.root_element().text().collect()
}
