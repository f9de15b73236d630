// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Static Content Scanner
 * Pattern scanning of HTML/JS source for unsafe constructs
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use crate::session::Evaluation;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

/// Unsafe-JS signature table. Each signature is counted at most once per
/// scan regardless of how often it matches.
static UNSAFE_JS_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r"(?i)document\.write").unwrap(),
            "Usage of document.write detected - potential XSS risk",
        ),
        (
            Regex::new(r"(?i)eval\s*\(").unwrap(),
            "Usage of eval() detected - potential security risk",
        ),
        (
            Regex::new(r"(?i)innerHTML\s*=").unwrap(),
            "Direct manipulation of innerHTML detected - potential XSS risk",
        ),
        (
            Regex::new(r"(?i)on\w+\s*=").unwrap(),
            "Inline event handlers detected - consider using addEventListener",
        ),
        (
            Regex::new(r#"(?i)setTimeout\s*\(\s*['"`]"#).unwrap(),
            "Potentially unsafe use of setTimeout with string argument",
        ),
        (
            Regex::new(r#"(?i)setInterval\s*\(\s*['"`]"#).unwrap(),
            "Potentially unsafe use of setInterval with string argument",
        ),
    ]
});

/// An HTML tag followed by an entity-encoded `<script>` token: the page
/// emitted a literal `<script>` as text instead of markup.
static ENCODED_SCRIPT_OUTPUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>.*&lt;script&gt;").unwrap());

/// Scan page text and element tree for unsafe constructs. Pure function of
/// the content; no I/O.
pub fn scan(content: &str) -> Evaluation {
    let mut eval = Evaluation::default();

    let inline_scripts = count_inline_scripts(content);
    if inline_scripts > 0 {
        eval.record(
            -(inline_scripts as f64),
            format!(
                "Inline scripts detected ({}) - consider moving to external files",
                inline_scripts
            ),
        );
    }

    for (pattern, message) in UNSAFE_JS_PATTERNS.iter() {
        if pattern.is_match(content) {
            eval.record(-1.0, *message);
        }
    }

    if ENCODED_SCRIPT_OUTPUT.is_match(content) {
        eval.record(1.0, "Evidence of HTML encoding in output - good practice");
    }

    eval
}

/// `<script>` elements with no `src` attribute.
fn count_inline_scripts(content: &str) -> usize {
    let document = Html::parse_document(content);
    let script_selector = Selector::parse("script").unwrap();

    document
        .select(&script_selector)
        .filter(|script| script.value().attr("src").is_none())
        .count()
}

/// CSRF sub-pass: one advisory per `<form>` that carries no hidden input
/// named after a CSRF token. Findings only, never a score change.
pub fn check_forms(content: &str) -> Vec<String> {
    let document = Html::parse_document(content);
    let form_selector = Selector::parse("form").unwrap();
    let input_selector = Selector::parse("input").unwrap();

    let mut findings = Vec::new();

    for form in document.select(&form_selector) {
        let has_csrf_token = form.select(&input_selector).any(|input| {
            let element = input.value();
            let is_hidden = element
                .attr("type")
                .is_some_and(|t| t.eq_ignore_ascii_case("hidden"));
            let name_is_csrf = element
                .attr("name")
                .is_some_and(|n| n.to_lowercase().contains("csrf"));
            is_hidden && name_is_csrf
        });

        if !has_csrf_token {
            let form_id = form.value().attr("id").unwrap_or("unknown");
            debug!("form '{}' has no CSRF token field", form_id);
            findings.push(format!(
                "Form {} lacks CSRF token - potential XSS risk",
                form_id
            ));
        }
    }

    findings
}
