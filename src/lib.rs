// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Page Security Scanner Library
 * Exposes scanner modules for testing
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

pub mod config;
pub mod detectors;
pub mod errors;
pub mod fetcher;
pub mod http_client;
pub mod prober;
pub mod reporting;
pub mod scanner;
pub mod target;
pub mod types;
