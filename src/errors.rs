// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Fetch Error Types
 * Every failure on the request path of a scan maps onto FetchError
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use std::time::Duration;
use thiserror::Error;

/// Failure to retrieve a URL, classified by cause
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Connection timeout after {timeout:?} to {url}")]
    Timeout {
        url: String,
        timeout: Duration,
    },

    #[error("Connection failed for {url}: {reason}")]
    ConnectionFailed {
        url: String,
        reason: String,
    },

    #[error("HTTP {status_code} error for {url}")]
    HttpStatus {
        url: String,
        status_code: u16,
    },

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl {
        url: String,
        reason: String,
    },

    #[error("Request to {url} failed: {reason}")]
    Other {
        url: String,
        reason: String,
    },
}

impl FetchError {
    /// URL the failed request was aimed at
    pub fn url(&self) -> &str {
        match self {
            FetchError::Timeout { url, .. }
            | FetchError::ConnectionFailed { url, .. }
            | FetchError::HttpStatus { url, .. }
            | FetchError::InvalidUrl { url, .. }
            | FetchError::Other { url, .. } => url,
        }
    }

    /// Status code for errors raised from an HTTP error response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Classify a reqwest error. `url` is the requested URL, which reqwest
    /// does not report for builder errors.
    pub fn from_reqwest(err: reqwest::Error, url: &str, timeout: Duration) -> Self {
        let url = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| url.to_string());

        if err.is_timeout() {
            FetchError::Timeout { url, timeout }
        } else if err.is_builder() {
            FetchError::InvalidUrl {
                url,
                reason: err.to_string(),
            }
        } else if err.is_connect() {
            FetchError::ConnectionFailed {
                url,
                reason: err.to_string(),
            }
        } else if let Some(status) = err.status() {
            FetchError::HttpStatus {
                url,
                status_code: status.as_u16(),
            }
        } else {
            FetchError::Other {
                url,
                reason: err.to_string(),
            }
        }
    }
}

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;
