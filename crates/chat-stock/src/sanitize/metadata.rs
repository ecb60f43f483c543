//! Metadata stripping
//!
//! Removes framework-internal `key=value` artifacts, serialized message
//! lists, tool-call tags, and fixed boilerplate blocks from raw agent
//! output. All patterns run on the non-backtracking `regex` engine and are
//! bounded to a line (or to the first closing delimiter), so pathological
//! input cannot trigger unbounded scans.

use regex::Regex;
use std::sync::LazyLock;

/// `key=value` artifacts removed up to (but excluding) the next newline
static LINE_ARTIFACTS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"content_type=[^\n]*",
        r"event=[^\n]*",
        r"metrics=[^\n]*",
        r"run_id=[^\n]*",
        r"agent_id=[^\n]*",
        r"model=[^\n]*",
        r"created_at=[^\n]*",
        r"tool_call_id=[^\n]*",
        r"tool_name=[^\n]*",
        r"tool_args=[^\n]*",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid artifact pattern"))
    .collect()
});

/// Serialized message lists spanning to the first closing bracket
static MESSAGES_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)messages=\[.*?\]").expect("valid pattern"));

/// Inline tool-call tags
static TOOL_CALL_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<tool_call[^>]*>").expect("valid pattern"));

/// Team-leader system preamble, removed up to the next blank line
static TEAM_PREAMBLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)## You are the leader of a team.*?(\n\n|\z)").expect("valid pattern")
});

/// Team-roster listing, removed up to the next blank line
static TEAM_ROSTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Agents in your team:.*?(\n\n|\z)").expect("valid pattern")
});

/// Upstream retry chatter
static RETRY_ISSUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)It seems there was an issue.*?try again:").expect("valid pattern")
});
static RETRY_AGAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Let me try again[^\n]*:").expect("valid pattern"));

/// Runs of three or more newlines (possibly with interior whitespace)
static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n").expect("valid pattern"));

/// Strip framework-internal artifacts from raw agent output
///
/// Removal of a `key=value` fragment leaves the newline boundary behind it
/// intact; runs of blank lines produced by removals are collapsed at the
/// end.
pub fn strip_metadata(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = text.to_string();

    // Serialized message lists first so their contents cannot shadow the
    // line-scoped patterns below
    out = MESSAGES_BLOCK.replace_all(&out, "").into_owned();

    for re in LINE_ARTIFACTS.iter() {
        out = re.replace_all(&out, "").into_owned();
    }

    // Boilerplate blocks; the trailing blank line (when present) survives
    out = TEAM_PREAMBLE.replace_all(&out, "$1").into_owned();
    out = TEAM_ROSTER.replace_all(&out, "$1").into_owned();

    out = TOOL_CALL_TAG.replace_all(&out, "").into_owned();
    out = RETRY_ISSUE.replace_all(&out, "").into_owned();
    out = RETRY_AGAIN.replace_all(&out, "").into_owned();

    // Literal "\n" sequences come through when upstream double-escapes
    out = out.replace("\\n", "\n");
    out = EXCESS_NEWLINES.replace_all(&out, "\n\n").into_owned();

    out.trim().to_string()
}
