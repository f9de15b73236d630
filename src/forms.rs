// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Form Discovery
 * Extracts injectable forms from a parsed page
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::debug;

/// A form as discovered on the target page.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredForm {
    /// Raw `action` attribute, possibly relative or empty
    pub action: String,
    /// Lowercased `method` attribute, "get" when absent
    pub method: String,
    /// Named input fields, in document order, deduplicated
    pub inputs: Vec<String>,
}

/// Extract all `<form>` elements with their action, method, and named
/// inputs. Inputs without a `name` attribute cannot carry a payload and
/// are ignored.
pub fn discover_forms(content: &str) -> Vec<DiscoveredForm> {
    let document = Html::parse_document(content);
    let form_selector = Selector::parse("form").unwrap();
    let input_selector = Selector::parse("input").unwrap();

    let mut forms = Vec::new();

    for form_element in document.select(&form_selector) {
        let action = form_element
            .value()
            .attr("action")
            .unwrap_or("")
            .to_string();
        let method = form_element
            .value()
            .attr("method")
            .unwrap_or("get")
            .to_lowercase();

        let mut seen = HashSet::new();
        let inputs: Vec<String> = form_element
            .select(&input_selector)
            .filter_map(|input| input.value().attr("name"))
            .filter(|name| seen.insert(name.to_string()))
            .map(str::to_string)
            .collect();

        debug!(
            "discovered form: action='{}' method={} inputs={}",
            action,
            method,
            inputs.len()
        );

        forms.push(DiscoveredForm {
            action,
            method,
            inputs,
        });
    }

    forms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_form_with_inputs() {
        let content = r#"
            <form action="/search" method="GET">
                <input name="q" type="text">
                <input name="lang" type="text">
                <input type="submit" value="Go">
            </form>
        "#;
        let forms = discover_forms(content);

        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].action, "/search");
        assert_eq!(forms[0].method, "get");
        assert_eq!(forms[0].inputs, vec!["q", "lang"]);
    }

    #[test]
    fn test_defaults_for_missing_attributes() {
        let forms = discover_forms(r#"<form><input name="comment"></form>"#);

        assert_eq!(forms[0].action, "");
        assert_eq!(forms[0].method, "get");
    }

    #[test]
    fn test_duplicate_input_names_collapse() {
        let content = r#"
            <form action="/a" method="post">
                <input name="tag"><input name="tag"><input name="other">
            </form>
        "#;
        let forms = discover_forms(content);

        assert_eq!(forms[0].inputs, vec!["tag", "other"]);
    }

    #[test]
    fn test_unnamed_inputs_ignored() {
        let forms = discover_forms(r#"<form action="/x"><input type="text"></form>"#);

        assert_eq!(forms.len(), 1);
        assert!(forms[0].inputs.is_empty());
    }
}
