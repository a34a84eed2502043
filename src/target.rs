// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Operator input to scan target. No validation beyond the scheme check:
//! malformed URLs surface later as fetch errors.

const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// True when `input` starts with `http://` or `https://`, ignoring ASCII case
pub fn has_http_scheme(input: &str) -> bool {
    starts_with_ignore_case(input, "http://") || starts_with_ignore_case(input, "https://")
}

/// Trim `input` and prefix `https://` unless it already names an HTTP scheme
pub fn normalize_target(input: &str) -> String {
    let trimmed = input.trim();
    if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME_PREFIX, trimmed)
    }
}

fn starts_with_ignore_case(input: &str, prefix: &str) -> bool {
    input
        .get(..prefix.len())
        .map(|head| head.eq_ignore_ascii_case(prefix))
        .unwrap_or(false)
}
