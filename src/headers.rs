// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Security Header Policy Evaluator
 * Scores HTTP response headers against known-good policies
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use crate::session::Evaluation;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static HSTS_MAX_AGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"max-age=(\d+)").unwrap());

/// One year, the minimum recommended HSTS max-age
const HSTS_MIN_MAX_AGE: u64 = 31_536_000;

/// Evaluate every header family and return the combined score delta and
/// findings. Pure function of the header set: each family contributes
/// independently and at most once.
pub fn evaluate(headers: &HashMap<String, String>) -> Evaluation {
    let mut eval = Evaluation::default();

    check_content_security_policy(headers, &mut eval);
    check_strict_transport_security(headers, &mut eval);
    check_x_frame_options(headers, &mut eval);
    check_x_content_type_options(headers, &mut eval);
    check_referrer_policy(headers, &mut eval);
    check_feature_policy(headers, &mut eval);

    eval
}

/// Case-insensitive header lookup; the caller's map may preserve the
/// transport's original casing.
fn header<'a>(headers: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

fn check_content_security_policy(headers: &HashMap<String, String>, eval: &mut Evaluation) {
    match header(headers, "Content-Security-Policy") {
        Some(csp) => {
            eval.record(1.0, "CSP header present - good");
            analyze_csp(csp, eval);
        }
        None => eval.advise("CSP header missing - consider implementing"),
    }
}

fn analyze_csp(csp: &str, eval: &mut Evaluation) {
    for directive in csp.split(';') {
        let directive = directive.trim();
        if directive.starts_with("default-src") {
            if directive.contains("'none'") {
                eval.record(1.0, "CSP uses 'default-src: none' - strict policy");
            } else if directive.contains("'self'") {
                eval.record(0.5, "CSP uses 'default-src: self' - moderately strict");
            }
        } else if directive.starts_with("script-src") {
            if directive.contains("'unsafe-inline'") || directive.contains("'unsafe-eval'") {
                eval.advise(
                    "CSP allows unsafe scripts - consider removing 'unsafe-inline' and 'unsafe-eval'",
                );
            } else {
                eval.record(1.0, "CSP properly restricts script sources");
            }
        }
    }
}

fn check_strict_transport_security(headers: &HashMap<String, String>, eval: &mut Evaluation) {
    let hsts = match header(headers, "Strict-Transport-Security") {
        Some(hsts) => hsts,
        None => {
            eval.advise("HSTS header missing - consider implementing");
            return;
        }
    };

    eval.record(1.0, "HSTS header present - good");
    if hsts.contains("includeSubDomains") {
        eval.record(0.5, "HSTS includes subdomains");
    }
    if hsts.contains("preload") {
        eval.record(0.5, "HSTS preload ready");
    }
    if let Some(captures) = HSTS_MAX_AGE.captures(hsts) {
        match captures[1].parse::<u64>() {
            Ok(age) if age >= HSTS_MIN_MAX_AGE => {
                eval.record(0.5, "HSTS max-age is at least one year");
            }
            Ok(age) => {
                eval.advise(format!(
                    "HSTS max-age is {} seconds - consider increasing to at least one year",
                    age
                ));
            }
            // Digit run too long for u64; value is nonsense either way
            Err(_) => eval.advise("HSTS max-age is not a usable number"),
        }
    }
}

fn check_x_frame_options(headers: &HashMap<String, String>, eval: &mut Evaluation) {
    match header(headers, "X-Frame-Options") {
        Some(value) => {
            eval.record(1.0, format!("X-Frame-Options header present: {}", value));
            if value.eq_ignore_ascii_case("DENY") || value.eq_ignore_ascii_case("SAMEORIGIN") {
                eval.record(0.5, "X-Frame-Options properly set to prevent clickjacking");
            }
        }
        None => eval.advise(
            "X-Frame-Options header missing - consider implementing to prevent clickjacking",
        ),
    }
}

fn check_x_content_type_options(headers: &HashMap<String, String>, eval: &mut Evaluation) {
    match header(headers, "X-Content-Type-Options") {
        Some(value) if value.eq_ignore_ascii_case("nosniff") => {
            eval.record(1.0, "X-Content-Type-Options header properly set to 'nosniff'");
        }
        Some(value) => eval.advise(format!(
            "X-Content-Type-Options header present but not set to 'nosniff': {}",
            value
        )),
        None => eval.advise(
            "X-Content-Type-Options header missing - consider implementing to prevent MIME type sniffing",
        ),
    }
}

fn check_referrer_policy(headers: &HashMap<String, String>, eval: &mut Evaluation) {
    match header(headers, "Referrer-Policy") {
        Some(value) => {
            eval.record(1.0, format!("Referrer-Policy header present: {}", value));
            if value.eq_ignore_ascii_case("no-referrer")
                || value.eq_ignore_ascii_case("strict-origin-when-cross-origin")
            {
                eval.record(0.5, "Referrer-Policy set to a strict value");
            }
        }
        None => eval.advise(
            "Referrer-Policy header missing - consider implementing to control referrer information",
        ),
    }
}

/// Feature-Policy is the legacy name; Permissions-Policy its successor.
/// The first one present wins, they are never scored twice.
fn check_feature_policy(headers: &HashMap<String, String>, eval: &mut Evaluation) {
    let policy = header(headers, "Feature-Policy").or_else(|| header(headers, "Permissions-Policy"));
    match policy {
        Some(_) => eval.record(1.0, "Feature-Policy/Permissions-Policy header present - good"),
        None => eval.advise(
            "Feature-Policy/Permissions-Policy header missing - consider implementing to control browser features",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_from(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_no_security_headers_yields_six_advisories() {
        let headers = headers_from(&[("Content-Type", "text/html"), ("Server", "nginx")]);
        let eval = evaluate(&headers);

        assert_eq!(eval.score, 0.0);
        assert_eq!(eval.findings.len(), 6);
        assert!(eval.findings.iter().all(|f| f.contains("missing")));
    }

    #[test]
    fn test_strict_csp_scores_three() {
        let headers = headers_from(&[(
            "Content-Security-Policy",
            "default-src 'none'; script-src 'self'",
        )]);
        let eval = evaluate(&headers);

        // present +1, default-src 'none' +1, safe script-src +1
        assert_eq!(eval.score, 3.0);
    }

    #[test]
    fn test_unsafe_inline_csp_is_warning_only() {
        let headers = headers_from(&[(
            "content-security-policy",
            "script-src 'self' 'unsafe-inline'",
        )]);
        let eval = evaluate(&headers);

        assert_eq!(eval.score, 1.0, "only the presence bonus applies");
        assert!(eval
            .findings
            .iter()
            .any(|f| f.contains("unsafe scripts")));
    }

    #[test]
    fn test_full_hsts_scores_two_and_a_half() {
        let headers = headers_from(&[(
            "Strict-Transport-Security",
            "max-age=63072000; includeSubDomains; preload",
        )]);
        let eval = evaluate(&headers);

        assert_eq!(eval.score, 2.5);
    }

    #[test]
    fn test_short_hsts_max_age_is_advisory() {
        let headers = headers_from(&[("Strict-Transport-Security", "max-age=300")]);
        let eval = evaluate(&headers);

        assert_eq!(eval.score, 1.0);
        assert!(eval
            .findings
            .iter()
            .any(|f| f.contains("300 seconds")));
    }

    #[test]
    fn test_nosniff_scores_one() {
        let eval = evaluate(&headers_from(&[("X-Content-Type-Options", "NOSNIFF")]));
        assert_eq!(eval.score, 1.0);

        let eval = evaluate(&headers_from(&[("X-Content-Type-Options", "sniff-away")]));
        assert_eq!(eval.score, 0.0);
        assert!(eval
            .findings
            .iter()
            .any(|f| f.contains("not set to 'nosniff'")));
    }

    #[test]
    fn test_x_frame_options_value_bonus() {
        let eval = evaluate(&headers_from(&[("X-Frame-Options", "sameorigin")]));
        assert_eq!(eval.score, 1.5);

        let eval = evaluate(&headers_from(&[("X-Frame-Options", "ALLOW-FROM x")]));
        assert_eq!(eval.score, 1.0);
    }

    #[test]
    fn test_permissions_policy_fallback() {
        let eval = evaluate(&headers_from(&[("Permissions-Policy", "camera=()")]));
        assert_eq!(eval.score, 1.0);
        assert!(eval
            .findings
            .iter()
            .any(|f| f.contains("header present - good")));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let headers = headers_from(&[
            ("Content-Security-Policy", "default-src 'self'"),
            ("Strict-Transport-Security", "max-age=31536000"),
        ]);

        let first = evaluate(&headers);
        let second = evaluate(&headers);
        assert_eq!(first, second);
    }
}
