// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * End-to-End Analyzer Tests
 * Full analysis runs: headers, content, probing, and report assembly
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use mockito::Server;
use std::collections::HashMap;
use xssprobe::analyzer::XssAnalyzer;
use xssprobe::config::AnalyzerConfig;
use xssprobe::payloads;
use xssprobe::session::VulnerabilityKind;

fn test_analyzer() -> XssAnalyzer {
    let config = AnalyzerConfig {
        timeout_secs: 5,
        max_retries: 0,
        probe_deadline_secs: 30,
        ..AnalyzerConfig::default()
    };
    XssAnalyzer::new(config).unwrap()
}

fn headers_from(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn test_well_defended_page_scores_good() {
    let analyzer = test_analyzer();
    let headers = headers_from(&[("Content-Security-Policy", "default-src 'none'")]);
    let content = "<html><body><p>static page</p></body></html>";

    // No query parameters and no forms: the probe phase issues no requests
    let report = analyzer
        .analyze("https://example.com/about", &headers, content)
        .await
        .unwrap();

    assert_eq!(report.score, 2.0);
    assert_eq!(report.overall_assessment, "Good XSS protection measures in place");
    // CSP present + strict default-src, plus five missing-header advisories
    assert_eq!(report.findings.len(), 7);
    // Only the appended summary record
    assert_eq!(report.vulnerabilities.len(), 1);
    assert_eq!(
        report.vulnerabilities[0].kind,
        VulnerabilityKind::AnalysisSummary
    );
}

#[tokio::test]
async fn test_score_of_exactly_one_is_middle_band() {
    let analyzer = test_analyzer();
    let headers = headers_from(&[("X-Content-Type-Options", "nosniff")]);

    let report = analyzer
        .analyze("https://example.com/page", &headers, "<html></html>")
        .await
        .unwrap();

    assert_eq!(report.score, 1.0);
    assert_eq!(
        report.overall_assessment,
        "Some XSS protection, but improvements needed"
    );
}

#[tokio::test]
async fn test_reflecting_page_reports_vulnerabilities() {
    let mut server = Server::new_async().await;
    let echo_body = format!("<html>{}</html>", payloads::xss_payloads().join(" "));
    let _mock = server
        .mock("GET", mockito::Matcher::Any)
        .with_status(200)
        .with_body(echo_body)
        .create_async()
        .await;

    let analyzer = test_analyzer();
    let target = format!("{}/item?id=3", server.url());

    let report = analyzer
        .analyze(&target, &HashMap::new(), "<html><body>item 3</body></html>")
        .await
        .unwrap();

    // Five reflected-xss records for `id`, plus the summary
    assert_eq!(report.vulnerabilities.len(), 6);
    assert_eq!(
        report
            .vulnerabilities
            .iter()
            .filter(|v| v.kind == VulnerabilityKind::ReflectedXss)
            .count(),
        5
    );
    assert_eq!(
        report.overall_assessment,
        "Weak XSS protection - improvements recommended"
    );
}

#[tokio::test]
async fn test_unsafe_content_drags_score_down() {
    let analyzer = test_analyzer();
    let content = r#"
        <html><body>
        <script>eval(userInput); document.write('x');</script>
        <form id="contact"><input type="text"></form>
        </body></html>
    "#;

    let report = analyzer
        .analyze("https://example.com/contact", &HashMap::new(), content)
        .await
        .unwrap();

    // inline script -1, eval -1, document.write -1
    assert!(report.score <= -3.0);
    assert!(report
        .findings
        .iter()
        .any(|f| f == "Form contact lacks CSRF token - potential XSS risk"));
    assert_eq!(
        report.overall_assessment,
        "Weak XSS protection - improvements recommended"
    );
}

#[tokio::test]
async fn test_invalid_target_url_is_an_error() {
    let analyzer = test_analyzer();

    let result = analyzer
        .analyze("not a url", &HashMap::new(), "<html></html>")
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_report_serializes_with_stable_field_names() {
    let analyzer = test_analyzer();

    let report = analyzer
        .analyze("https://example.com/", &HashMap::new(), "")
        .await
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["url"], "https://example.com/");
    assert!(json["findings"].is_array());
    assert!(json["vulnerabilities"].is_array());
    assert!(json["overallAssessment"].is_string());
    assert_eq!(json["vulnerabilities"][0]["kind"], "analysis-summary");
}
