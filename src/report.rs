// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Report Assembler
 * Folds a finished session into the scored report
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use crate::session::{AnalysisSession, Vulnerability, VulnerabilityKind};
use serde::{Deserialize, Serialize};

const ASSESSMENT_GOOD: &str = "Good XSS protection measures in place";
const ASSESSMENT_SOME: &str = "Some XSS protection, but improvements needed";
const ASSESSMENT_WEAK: &str = "Weak XSS protection - improvements recommended";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub url: String,
    pub score: f64,
    pub findings: Vec<String>,
    pub vulnerabilities: Vec<Vulnerability>,
    pub overall_assessment: String,
}

/// Assemble the final report. Called exactly once per session, after all
/// probing completes. A summary record is appended to the vulnerability
/// sequence before the report is built, so it appears in both places.
pub fn assemble(mut session: AnalysisSession) -> Report {
    let overall_assessment = verdict(session.score).to_string();

    session.vulnerabilities.push(Vulnerability {
        location: session.target_url.clone(),
        kind: VulnerabilityKind::AnalysisSummary,
        detail: overall_assessment.clone(),
    });

    Report {
        url: session.target_url,
        score: session.score,
        findings: session.findings,
        vulnerabilities: session.vulnerabilities,
        overall_assessment,
    }
}

/// Verdict over the accumulated scalar. The middle band applies to a score
/// of exactly 1; everything below 2 other than that is weak.
fn verdict(score: f64) -> &'static str {
    if score >= 2.0 {
        ASSESSMENT_GOOD
    } else if score == 1.0 {
        ASSESSMENT_SOME
    } else {
        ASSESSMENT_WEAK
    }
}
