// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use anyhow::{Context, Result};
use async_trait::async_trait;
use encoding_rs::{Encoding, UTF_8};
use reqwest::Client;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::config::ScannerConfig;
use crate::errors::{FetchError, FetchResult};
use crate::fetcher::Transport;

/// Maximum response body size (10MB); reading stops once it is reached
const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// reqwest-backed transport: one GET per call, no retries, no caching
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
    max_body_size: usize,
}

impl HttpClient {
    pub fn new(config: &ScannerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            timeout: config.timeout(),
            max_body_size: MAX_BODY_SIZE,
        })
    }

    /// Client with the built-in browser User-Agent and 10 second timeout
    pub fn with_defaults() -> Result<Self> {
        Self::new(&ScannerConfig::default())
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn fetch(&self, url: &str) -> FetchResult<HttpResponse> {
        let started = Instant::now();

        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, url, self.timeout))?;

        let status_code = response.status().as_u16();

        let headers = {
            let headers = response.headers();
            let mut map = HashMap::with_capacity(headers.len());
            for (k, v) in headers.iter() {
                if let Ok(value_str) = v.to_str() {
                    map.insert(k.as_str().to_string(), value_str.to_string());
                }
            }
            map
        };

        let mut body_bytes = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| FetchError::from_reqwest(e, url, self.timeout))?
        {
            let remaining = self.max_body_size - body_bytes.len();
            if chunk.len() >= remaining {
                body_bytes.extend_from_slice(&chunk[..remaining]);
                debug!("Truncated response body of {} at {} bytes", url, self.max_body_size);
                break;
            }
            body_bytes.extend_from_slice(&chunk);
        }

        let body = decode_body(&body_bytes, headers.get("content-type").map(String::as_str));

        let duration_ms = started.elapsed().as_millis() as u64;
        debug!("GET {} -> {} in {}ms", url, status_code, duration_ms);

        Ok(HttpResponse {
            status_code,
            body,
            headers,
            duration_ms,
        })
    }
}

/// Decode `bytes` with the charset declared in `content_type`, falling back
/// to UTF-8 when none is declared or the label is unknown
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_label)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);

    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

fn charset_label(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if name.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches('"'))
        } else {
            None
        }
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: String,
    /// Header names are stored lowercase
    pub headers: HashMap<String, String>,
    pub duration_ms: u64,
}

impl HttpResponse {
    /// Response with no headers, for stub transports
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
            headers: HashMap::new(),
            duration_ms: 0,
        }
    }

    pub fn header(&self, name: &str) -> Option<String> {
        self.headers.get(&name.to_lowercase()).cloned()
    }

    /// 4xx and 5xx statuses
    pub fn is_error_status(&self) -> bool {
        self.status_code >= 400
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut response = HttpResponse::new(200, "ok");
        response
            .headers
            .insert("server".to_string(), "Apache/2.4.41".to_string());

        assert_eq!(response.header("Server"), Some("Apache/2.4.41".to_string()));
        assert_eq!(response.header("x-powered-by"), None);
    }

    #[test]
    fn test_error_status_boundaries() {
        assert!(!HttpResponse::new(200, "").is_error_status());
        assert!(!HttpResponse::new(302, "").is_error_status());
        assert!(HttpResponse::new(400, "").is_error_status());
        assert!(HttpResponse::new(503, "").is_error_status());
    }

    #[test]
    fn test_decode_body_uses_declared_charset() {
        let latin1 = b"<title>Caf\xe9</title>";

        assert_eq!(
            decode_body(latin1, Some("text/html; charset=iso-8859-1")),
            "<title>Caf\u{e9}</title>"
        );
        assert_eq!(
            decode_body(latin1, Some("text/html; Charset=\"windows-1252\"")),
            "<title>Caf\u{e9}</title>"
        );
    }

    #[test]
    fn test_decode_body_defaults_to_utf8() {
        let utf8 = "<title>Caf\u{e9}</title>".as_bytes();

        assert_eq!(decode_body(utf8, None), "<title>Caf\u{e9}</title>");
        assert_eq!(decode_body(utf8, Some("text/html")), "<title>Caf\u{e9}</title>");
        assert_eq!(
            decode_body(utf8, Some("text/html; charset=no-such-charset")),
            "<title>Caf\u{e9}</title>"
        );
    }
}
