// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Fetcher
 * Single-attempt GET through a pluggable transport
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use async_trait::async_trait;
use tracing::{info, warn};

use crate::errors::{FetchError, FetchResult};
use crate::http_client::HttpResponse;

/// Anything that can perform one blocking-until-done GET.
///
/// Implementations return the response for every status code and reserve
/// `Err` for failures that produced no response at all.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchResult<HttpResponse>;
}

/// Fetch `url` once, tracing the attempt
pub async fn fetch(transport: &dyn Transport, url: &str) -> FetchResult<HttpResponse> {
    info!("Fetching: {}", url);

    let result = transport.fetch(url).await;
    if let Err(e) = &result {
        warn!("Error fetching {}: {}", url, e);
    }
    result
}

/// Fetch a page that must load: 4xx and 5xx responses become
/// `FetchError::HttpStatus`
pub async fn fetch_page(transport: &dyn Transport, url: &str) -> FetchResult<HttpResponse> {
    let response = fetch(transport, url).await?;

    if response.is_error_status() {
        let err = FetchError::HttpStatus {
            url: url.to_string(),
            status_code: response.status_code,
        };
        warn!("Error fetching {}: {}", url, err);
        return Err(err);
    }

    Ok(response)
}
