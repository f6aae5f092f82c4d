//! PII guardrails: detect and mask sensitive values in free text.
//!
//! Three fixed pattern categories run in a fixed order — US Social Security
//! numbers, 16-digit card numbers, and email addresses. Every match is
//! recorded in the audit list before being replaced with its category token,
//! so the caller can log what was caught; the replacement itself is plain
//! textual substitution and is not reversible.
//!
//! This filter applies only to Q&A question and answer text when the caller
//! enables guardrails. Document bytes are never scanned — the document goes
//! to the model as-is.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static RE_SSN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").unwrap());
static RE_CARD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{16}\b").unwrap());
static RE_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// Category order is part of the contract: SSNs first, then card numbers,
/// then emails.
fn patterns() -> [(&'static Regex, &'static str); 3] {
    [
        (&*RE_SSN, "[SSN_REDACTED]"),
        (&*RE_CARD, "[CARD_REDACTED]"),
        (&*RE_EMAIL, "[EMAIL_REDACTED]"),
    ]
}

/// Whether anything was masked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RedactionAction {
    Allowed,
    Filtered,
}

/// Result of one guardrail pass. Derived per call, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionOutcome {
    /// The text with every sensitive match replaced by its category token.
    pub filtered_text: String,
    /// The original matched substrings, in the order they were found
    /// (category by category). Kept for audit only.
    pub redactions: Vec<String>,
    pub action: RedactionAction,
}

impl RedactionOutcome {
    pub fn was_filtered(&self) -> bool {
        self.action == RedactionAction::Filtered
    }
}

/// Scan `text` for sensitive patterns and mask every match.
///
/// Total and pure: text with no sensitive content comes back byte-identical
/// with `action == Allowed`.
pub fn redact(text: &str) -> RedactionOutcome {
    let mut filtered = text.to_string();
    let mut redactions = Vec::new();

    for (pattern, token) in patterns() {
        if !pattern.is_match(&filtered) {
            continue;
        }
        for m in pattern.find_iter(&filtered) {
            redactions.push(m.as_str().to_string());
        }
        filtered = pattern.replace_all(&filtered, token).into_owned();
    }

    let action = if redactions.is_empty() {
        RedactionAction::Allowed
    } else {
        RedactionAction::Filtered
    };

    RedactionOutcome {
        filtered_text: filtered,
        redactions,
        action,
    }
}
