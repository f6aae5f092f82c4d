//! Document-name sanitizer.
//!
//! The Converse document block only accepts names made of alphanumerics,
//! single spaces, hyphens, parentheses, and square brackets; anything else is
//! rejected by the service. Rather than bubbling that rejection up from the
//! API, the name is normalised locally: disallowed characters become `_`,
//! space runs collapse, and an empty result falls back to a fixed default.
//!
//! Total over all inputs — this function never fails.

use once_cell::sync::Lazy;
use regex::Regex;

/// Fallback when the input is empty or collapses to nothing.
pub const DEFAULT_NAME: &str = "document.pdf";

static RE_MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());

/// Normalise a display name for the document block.
///
/// Rules, in order:
/// 1. every character outside {A–Z, a–z, 0–9, space, `-`, `(`, `)`, `[`, `]`}
///    is replaced with `_`
/// 2. runs of two or more spaces collapse to a single space
/// 3. leading and trailing spaces are trimmed
/// 4. an empty input, or one that is empty after trimming, yields
///    [`DEFAULT_NAME`]
pub fn sanitize_filename(name: &str) -> String {
    if name.is_empty() {
        return DEFAULT_NAME.to_string();
    }

    let replaced: String = name
        .chars()
        .map(|c| if is_allowed(c) { c } else { '_' })
        .collect();

    let collapsed = RE_MULTI_SPACE.replace_all(&replaced, " ");
    let trimmed = collapsed.trim();

    if trimmed.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '(' | ')' | '[' | ']')
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Output may contain the allowed set plus the `_` replacement character.
    fn assert_only_allowed_chars(s: &str) {
        for c in s.chars() {
            assert!(
                is_allowed(c) || c == '_',
                "disallowed char {c:?} survived in {s:?}"
            );
        }
    }

    #[test]
    fn clean_names_pass_through() {
        assert_eq!(sanitize_filename("Q3 report (final) [v2]"), "Q3 report (final) [v2]");
        assert_eq!(sanitize_filename("annual-review"), "annual-review");
    }

    #[test]
    fn disallowed_chars_become_underscores() {
        assert_eq!(sanitize_filename("my file!.pdf"), "my file__pdf");
        assert_eq!(sanitize_filename("a/b\\c"), "a_b_c");
        assert_only_allowed_chars(&sanitize_filename("résumé@2024.pdf"));
    }

    #[test]
    fn space_runs_collapse() {
        let out = sanitize_filename("too    many   spaces");
        assert_eq!(out, "too many spaces");
        assert!(!out.contains("  "), "double space survived: {out:?}");
    }

    #[test]
    fn leading_and_trailing_spaces_trimmed() {
        assert_eq!(sanitize_filename("  padded  "), "padded");
    }

    #[test]
    fn empty_input_falls_back() {
        assert_eq!(sanitize_filename(""), DEFAULT_NAME);
    }

    #[test]
    fn space_only_input_falls_back() {
        assert_eq!(sanitize_filename("     "), DEFAULT_NAME);
    }

    #[test]
    fn never_two_consecutive_spaces_for_any_input() {
        let inputs = [
            "a  b   c    d",
            "!@#$  %^&*",
            "  tab\there  ",
            "mixed  é  input",
        ];
        for input in inputs {
            let out = sanitize_filename(input);
            assert!(!out.contains("  "), "{input:?} → {out:?}");
            assert_only_allowed_chars(&out);
        }
    }
}
