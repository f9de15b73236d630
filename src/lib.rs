// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Single-Page XSS Analyzer Library
 * Exposes analyzer modules for testing
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

pub mod config;
pub mod errors;
pub mod http_client;
pub mod payloads;
pub mod session;

// Rule evaluators (pure, no I/O)
pub mod content;
pub mod headers;

// Page structure discovery
pub mod forms;

// Active probing engine
pub mod probe;

// Report assembly and orchestration
pub mod analyzer;
pub mod report;
