// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Reflection Probe Engine
 * Concurrent reflected-XSS verification against URL parameters and forms
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use crate::config::AnalyzerConfig;
use crate::forms::DiscoveredForm;
use crate::http_client::{HttpClient, HttpResponse};
use crate::payloads;
use crate::session::Vulnerability;
use futures::future::{BoxFuture, FutureExt};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, info, warn};
use url::form_urlencoded;
use url::Url;

pub struct ReflectionProber {
    http_client: Arc<HttpClient>,
    concurrency: usize,
    deadline: Duration,
    check_every_payload: bool,
}

/// A form whose action resolved to an absolute URL and which has at least
/// one named input to inject into.
struct PreparedForm {
    action: Url,
    method: String,
    fields: Vec<String>,
}

impl PreparedForm {
    fn resolve(form: &DiscoveredForm, base: &Url) -> Option<Self> {
        if form.inputs.is_empty() {
            debug!("skipping form '{}': no named inputs", form.action);
            return None;
        }
        let action = match base.join(&form.action) {
            Ok(action) => action,
            Err(e) => {
                debug!("skipping form '{}': unresolvable action: {}", form.action, e);
                return None;
            }
        };
        Some(Self {
            action,
            method: form.method.clone(),
            fields: form.inputs.clone(),
        })
    }
}

impl ReflectionProber {
    pub fn new(http_client: Arc<HttpClient>, config: &AnalyzerConfig) -> Self {
        Self {
            http_client,
            concurrency: config.probe_concurrency.max(1),
            deadline: Duration::from_secs(config.probe_deadline_secs),
            check_every_payload: config.check_every_payload,
        }
    }

    /// Probe every URL query parameter and every discovered form for
    /// verbatim payload reflection.
    ///
    /// Parameter/payload pairs are independent and run concurrently. Within
    /// one form the payloads are submitted sequentially in catalog order;
    /// forms run concurrently with each other and with the parameter pairs.
    /// The fan-in loop is the single writer into the result vector. When the
    /// deadline elapses, in-flight probes are abandoned and everything
    /// collected so far is returned.
    pub async fn run(&self, target_url: &str, forms: &[DiscoveredForm]) -> Vec<Vulnerability> {
        let base = match Url::parse(target_url) {
            Ok(base) => base,
            Err(e) => {
                warn!("cannot probe '{}': {}", target_url, e);
                return Vec::new();
            }
        };

        let mut probes: Vec<BoxFuture<'_, Vec<Vulnerability>>> = Vec::new();

        for (name, _value) in query_parameters(&base) {
            for &payload in payloads::xss_payloads() {
                probes.push(self.probe_parameter(base.clone(), name.clone(), payload).boxed());
            }
        }

        for form in forms {
            if let Some(prepared) = PreparedForm::resolve(form, &base) {
                probes.push(self.probe_form(prepared, target_url.to_string()).boxed());
            }
        }

        if probes.is_empty() {
            debug!("no injection targets on {}", target_url);
            return Vec::new();
        }

        info!("probing {} injection attempts against {}", probes.len(), target_url);

        let deadline = Instant::now() + self.deadline;
        let mut results = stream::iter(probes).buffer_unordered(self.concurrency);
        let mut vulnerabilities = Vec::new();

        loop {
            match timeout_at(deadline, results.next()).await {
                Ok(Some(found)) => vulnerabilities.extend(found),
                Ok(None) => break,
                Err(_) => {
                    warn!(
                        "probe deadline of {:?} elapsed; keeping {} collected result(s)",
                        self.deadline,
                        vulnerabilities.len()
                    );
                    break;
                }
            }
        }

        vulnerabilities
    }

    /// One parameter/payload attempt: substitute, GET, check for the
    /// payload echoed back unescaped.
    async fn probe_parameter(
        &self,
        base: Url,
        parameter: String,
        payload: &'static str,
    ) -> Vec<Vulnerability> {
        let test_url = substitute_query_value(&base, &parameter, payload);

        match self.http_client.get(test_url.as_str()).await {
            Ok(response) if response.is_success() => {
                if response.body.contains(payload) {
                    info!("reflected XSS: parameter '{}' echoes payload", parameter);
                    return vec![Vulnerability::reflected_xss(
                        parameter.clone(),
                        format!(
                            "Reflected XSS found in URL parameter {} at {}",
                            parameter, base
                        ),
                    )];
                }
            }
            Ok(response) => debug!(
                "status {} for {}; treating as no reflection",
                response.status_code, test_url
            ),
            Err(e) => debug!("request failed for {}: {}", test_url, e),
        }

        Vec::new()
    }

    /// One form: submit every payload in catalog order, assigning it to all
    /// named fields. By default only the last submitted payload is checked
    /// against the last received response; `check_every_payload` switches to
    /// the per-payload check used for URL parameters.
    async fn probe_form(&self, form: PreparedForm, page_url: String) -> Vec<Vulnerability> {
        let mut found = Vec::new();
        let mut last_submitted: Option<&'static str> = None;
        let mut last_received: Option<HttpResponse> = None;

        for &payload in payloads::xss_payloads() {
            last_submitted = Some(payload);

            let outcome = if form.method == "post" {
                let body = encode_fields(&form.fields, payload);
                self.http_client.post_form(form.action.as_str(), body).await
            } else {
                let test_url = append_fields(&form.action, &form.fields, payload);
                self.http_client.get(test_url.as_str()).await
            };

            match outcome {
                Ok(response) if response.is_success() => {
                    if self.check_every_payload && response.body.contains(payload) {
                        found.push(Vulnerability::reflected_xss(
                            form.action.to_string(),
                            format!("Reflected XSS found in form at {}", page_url),
                        ));
                    }
                    last_received = Some(response);
                }
                Ok(response) => debug!(
                    "form submit to {} returned status {}",
                    form.action, response.status_code
                ),
                Err(e) => debug!("form submit to {} failed: {}", form.action, e),
            }
        }

        if !self.check_every_payload {
            if let (Some(payload), Some(response)) = (last_submitted, last_received) {
                if response.body.contains(payload) {
                    info!("reflected XSS: form at {} echoes payload", form.action);
                    found.push(Vulnerability::reflected_xss(
                        form.action.to_string(),
                        format!("Reflected XSS found in form at {}", page_url),
                    ));
                }
            }
        }

        found
    }
}

/// Query parameters of the target URL, first value per name.
fn query_parameters(url: &Url) -> Vec<(String, String)> {
    let mut parameters: Vec<(String, String)> = Vec::new();
    for (name, value) in url.query_pairs() {
        if !parameters.iter().any(|(seen, _)| *seen == name) {
            parameters.push((name.into_owned(), value.into_owned()));
        }
    }
    parameters
}

/// Rebuild the URL's query with `parameter`'s value replaced by the
/// payload; the serializer percent-encodes it for transport.
fn substitute_query_value(base: &Url, parameter: &str, payload: &str) -> Url {
    let pairs: Vec<(String, String)> = base
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut test_url = base.clone();
    {
        let mut serializer = test_url.query_pairs_mut();
        serializer.clear();
        for (name, value) in &pairs {
            if name == parameter {
                serializer.append_pair(name, payload);
            } else {
                serializer.append_pair(name, value);
            }
        }
    }
    test_url
}

/// Form-encoded body assigning the payload to every field.
fn encode_fields(fields: &[String], payload: &str) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for name in fields {
        serializer.append_pair(name, payload);
    }
    serializer.finish()
}

/// GET submission: the field mapping appended as query parameters.
fn append_fields(action: &Url, fields: &[String], payload: &str) -> Url {
    let mut test_url = action.clone();
    {
        let mut serializer = test_url.query_pairs_mut();
        for name in fields {
            serializer.append_pair(name, payload);
        }
    }
    test_url
}
