// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Analysis Session State
 * Per-run score/findings accumulator and vulnerability records
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VulnerabilityKind {
    ReflectedXss,
    AnalysisSummary,
}

/// A confirmed, evidence-backed weakness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    pub location: String,
    pub kind: VulnerabilityKind,
    pub detail: String,
}

impl Vulnerability {
    pub fn reflected_xss(location: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            kind: VulnerabilityKind::ReflectedXss,
            detail: detail.into(),
        }
    }
}

/// Score/findings delta produced by one rule pass.
///
/// Rule evaluators return these instead of mutating shared state; the
/// facade merges them into the session, so two concurrent analyses can
/// never observe each other's accumulators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    pub score: f64,
    pub findings: Vec<String>,
}

impl Evaluation {
    /// Record a finding that adjusts the score.
    pub fn record(&mut self, delta: f64, message: impl Into<String>) {
        self.score += delta;
        self.findings.push(message.into());
    }

    /// Record an advisory finding with no score effect.
    pub fn advise(&mut self, message: impl Into<String>) {
        self.findings.push(message.into());
    }
}

/// Mutable state for a single analysis run.
///
/// Owned exclusively by one `analyze` call: created at the start, merged
/// into between phases, consumed by the report assembler.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    pub target_url: String,
    pub score: f64,
    pub findings: Vec<String>,
    pub vulnerabilities: Vec<Vulnerability>,
}

impl AnalysisSession {
    pub fn new(target_url: &str) -> Self {
        Self {
            target_url: target_url.to_string(),
            score: 0.0,
            findings: Vec::new(),
            vulnerabilities: Vec::new(),
        }
    }

    pub fn apply(&mut self, evaluation: Evaluation) {
        self.score += evaluation.score;
        self.findings.extend(evaluation.findings);
    }

    pub fn record_vulnerabilities(&mut self, vulnerabilities: Vec<Vulnerability>) {
        self.vulnerabilities.extend(vulnerabilities);
    }
}
