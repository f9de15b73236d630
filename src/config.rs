// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Analyzer Configuration
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerConfig {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retries per request before the attempt is abandoned
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Concurrent in-flight probe requests
    #[serde(default = "default_probe_concurrency")]
    pub probe_concurrency: usize,

    /// Overall probe-phase deadline in seconds. In-flight requests are
    /// abandoned when it elapses; collected results are kept.
    #[serde(default = "default_probe_deadline_secs")]
    pub probe_deadline_secs: u64,

    /// Check every form payload for reflection instead of only the last
    /// submitted one.
    #[serde(default)]
    pub check_every_payload: bool,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    2
}

fn default_probe_concurrency() -> usize {
    16
}

fn default_probe_deadline_secs() -> u64 {
    60
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            probe_concurrency: default_probe_concurrency(),
            probe_deadline_secs: default_probe_deadline_secs(),
            check_every_payload: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config: AnalyzerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.probe_concurrency, 16);
        assert!(!config.check_every_payload);
    }

    #[test]
    fn test_camel_case_overrides() {
        let config: AnalyzerConfig =
            serde_json::from_str(r#"{"probeDeadlineSecs": 5, "checkEveryPayload": true}"#).unwrap();
        assert_eq!(config.probe_deadline_secs, 5);
        assert!(config.check_every_payload);
    }
}
