// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Analyzer Error Types
 * Production-ready error handling with thiserror
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use thiserror::Error;

/// Analyzer error type.
///
/// Probe-phase transport failures never surface through this type: a failed
/// probe attempt counts as "no reflection" and the analysis continues. These
/// variants cover the edges where the caller handed us something unusable or
/// an explicitly requested fetch could not complete at all.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// HTTP transport failure (connect error, timeout, TLS failure)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The target URL could not be parsed
    #[error("Invalid target URL '{url}': {source}")]
    InvalidTarget {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
