// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Admin Path Prober
 * Requests well-known admin and login paths on the target's origin and
 * reports those answering 200
 *
 * A 200 is taken as "exposed" without looking at the page content, so a
 * catch-all route that serves 200 for every path shows up here too.
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

use crate::fetcher::{self, Transport};

pub struct AdminPathProber {
    transport: Arc<dyn Transport>,
    paths: Vec<String>,
}

impl AdminPathProber {
    pub fn new(transport: Arc<dyn Transport>, paths: Vec<String>) -> Self {
        Self { transport, paths }
    }

    /// Probe every path in order, one request at a time. Returns the
    /// resolved URLs that answered exactly 200, in probe order.
    pub async fn probe(&self, base_url: &str) -> Vec<String> {
        let base = match Url::parse(base_url) {
            Ok(base) => base,
            Err(e) => {
                warn!("Cannot probe admin paths, invalid base URL {}: {}", base_url, e);
                return Vec::new();
            }
        };

        let mut exposed = Vec::new();

        for path in &self.paths {
            let candidate = match base.join(path) {
                Ok(url) => url.to_string(),
                Err(e) => {
                    debug!("Skipping admin path {}: {}", path, e);
                    continue;
                }
            };

            info!("Checking for admin panel: {}", candidate);

            match fetcher::fetch(self.transport.as_ref(), &candidate).await {
                Ok(response) if response.status_code == 200 => {
                    info!("Admin path accessible: {}", candidate);
                    exposed.push(candidate);
                }
                Ok(response) => {
                    debug!("{} answered {}", candidate, response.status_code);
                }
                Err(_) => {
                    // already logged by the fetcher; an unreachable path is not exposed
                }
            }
        }

        exposed
    }
}
