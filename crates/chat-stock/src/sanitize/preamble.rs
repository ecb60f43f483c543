//! Preamble trimming
//!
//! Removes boilerplate lead-in phrases ("Based on...", "Summary:", ...)
//! from the start of cleaned text. Patterns are ordered: each is applied
//! at most once, first match only, anchored at the string start, so an
//! earlier pattern shortens the prefix before later ones are tried.

use regex::Regex;
use std::sync::LazyLock;

/// Ordered lead-in patterns, each bounded to the first line and consuming
/// through the first colon
static PREAMBLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^[^:\n]*analysis[^:\n]*:",
        r"(?i)^based on[^:\n]*:",
        r"(?i)^i found[^:\n]*:",
        r"(?i)^here[^:\n]*results[^:\n]*:",
        r"(?i)^summary[^:\n]*:",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid preamble pattern"))
    .collect()
});

/// Runs of three or more newlines (possibly with interior whitespace)
static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n").expect("valid pattern"));

/// Remove boilerplate lead-in phrases and normalize whitespace
pub fn trim_preamble(text: &str) -> String {
    let mut out = text.trim().to_string();

    for re in PREAMBLE_PATTERNS.iter() {
        if let Some(m) = re.find(&out) {
            out = out[m.end()..].trim_start().to_string();
        }
    }

    out = EXCESS_NEWLINES.replace_all(&out, "\n\n").into_owned();
    out.trim().to_string()
}
