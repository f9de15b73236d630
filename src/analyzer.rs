// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Analyzer Facade
 * Sequences header, content, and probe phases for one analysis run
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use crate::config::AnalyzerConfig;
use crate::content;
use crate::errors::AnalyzerError;
use crate::forms;
use crate::headers;
use crate::http_client::HttpClient;
use crate::probe::ReflectionProber;
use crate::report::{self, Report};
use crate::session::AnalysisSession;
use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;
use url::Url;

pub struct XssAnalyzer {
    http_client: Arc<HttpClient>,
    config: AnalyzerConfig,
}

impl XssAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let http_client = Arc::new(HttpClient::new(config.timeout_secs, config.max_retries)?);
        Ok(Self::with_client(http_client, config))
    }

    pub fn with_client(http_client: Arc<HttpClient>, config: AnalyzerConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Analyze one page: response headers, page content, and active
    /// reflection probing, in that order. Never fails on malformed content
    /// or probe transport errors; the only fatal input is an unparseable
    /// target URL.
    pub async fn analyze(
        &self,
        url: &str,
        response_headers: &HashMap<String, String>,
        content: &str,
    ) -> Result<Report> {
        Url::parse(url).map_err(|source| AnalyzerError::InvalidTarget {
            url: url.to_string(),
            source,
        })?;

        info!("analyzing {}", url);
        let mut session = AnalysisSession::new(url);

        session.apply(headers::evaluate(response_headers));
        session.apply(content::scan(content));
        for finding in content::check_forms(content) {
            session.findings.push(finding);
        }

        let discovered = forms::discover_forms(content);
        let prober = ReflectionProber::new(Arc::clone(&self.http_client), &self.config);
        let vulnerabilities = prober.run(url, &discovered).await;
        session.record_vulnerabilities(vulnerabilities);

        info!(
            "analysis of {} complete: score {}, {} finding(s), {} vulnerability record(s)",
            url,
            session.score,
            session.findings.len(),
            session.vulnerabilities.len()
        );

        Ok(report::assemble(session))
    }
}
