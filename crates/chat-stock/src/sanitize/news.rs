//! News section formatting
//!
//! Detects a labeled news section ("Latest News", "Recent News", or
//! "News"), extracts its items as a bounded bullet list, and removes the
//! section from the running text.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum number of news items surfaced per turn
pub const MAX_NEWS_ITEMS: usize = 5;

/// A formatted news section: at most [`MAX_NEWS_ITEMS`] single-line items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsSection {
    /// Whitespace-normalized news items
    pub items: Vec<String>,
}

/// Header patterns tried in order; each span runs to the next level-2
/// markdown header or the end of the text
static NEWS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?is)(Latest News.*?)(\n##|\z)",
        r"(?is)(Recent News.*?)(\n##|\z)",
        r"(?is)(News.*?)(\n##|\z)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid news pattern"))
    .collect()
});

/// Runs of whitespace, collapsed to a single space within an item
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid pattern"));

/// Extract the news section from the text
///
/// Returns the formatted section (if one was found with at least one item)
/// and the text with the matched span removed. A matched section with no
/// extractable items leaves the text untouched. The first matching header
/// pattern wins; later patterns are not tried.
pub fn extract_news(text: &str) -> (Option<NewsSection>, String) {
    for re in NEWS_PATTERNS.iter() {
        let Some(caps) = re.captures(text) else {
            continue;
        };
        let Some(span) = caps.get(1) else {
            continue;
        };

        let mut items = bullet_items(span.as_str());
        if items.is_empty() {
            // No bullets at all: fall back to plain lines that are neither
            // markdown headers nor table rows
            items = span
                .as_str()
                .lines()
                .map(str::trim)
                .filter(|line| {
                    !line.is_empty() && !line.starts_with('#') && !line.starts_with('|')
                })
                .map(normalize_item)
                .collect();
        }

        if items.is_empty() {
            return (None, text.trim().to_string());
        }

        items.truncate(MAX_NEWS_ITEMS);

        let mut remaining = String::with_capacity(text.len());
        remaining.push_str(&text[..span.start()]);
        remaining.push_str(&text[span.end()..]);
        return (
            Some(NewsSection { items }),
            remaining.trim().to_string(),
        );
    }

    (None, text.trim().to_string())
}

/// Collect lines with a leading `*` or `-` bullet marker
fn bullet_items(span: &str) -> Vec<String> {
    span.lines()
        .filter_map(|line| {
            let trimmed = line.trim_start();
            trimmed
                .strip_prefix('*')
                .or_else(|| trimmed.strip_prefix('-'))
                .map(normalize_item)
        })
        .filter(|item| !item.is_empty())
        .collect()
}

fn normalize_item(item: &str) -> String {
    WHITESPACE_RUN.replace_all(item.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullets_extracted_and_span_removed() {
        let text = "## Metrics\nprose\n\nLatest News\n- Apple ships new chip\n* Supply chain update";
        let (section, remaining) = extract_news(text);

        let section = section.expect("news section");
        assert_eq!(
            section.items,
            vec!["Apple ships new chip", "Supply chain update"]
        );
        assert!(!remaining.contains("Latest News"));
        assert!(remaining.contains("## Metrics"));
    }

    #[test]
    fn test_seven_bullets_capped_at_five() {
        let mut text = String::from("Latest News\n");
        for i in 1..=7 {
            text.push_str(&format!("- item {i}\n"));
        }

        let (section, _) = extract_news(&text);
        let section = section.expect("news section");
        assert_eq!(section.items.len(), 5);
        assert_eq!(section.items[0], "item 1");
        assert_eq!(section.items[4], "item 5");
    }

    #[test]
    fn test_span_stops_at_next_header() {
        let text = "Latest News\n- item one\n## Fundamentals\n| P/E | 27 |";
        let (section, remaining) = extract_news(text);

        assert_eq!(section.expect("news section").items, vec!["item one"]);
        // The following section survives, including its header
        assert!(remaining.starts_with("## Fundamentals"));
    }

    #[test]
    fn test_pattern_order_latest_before_recent() {
        let text = "Recent News\n- recent item\n\nLatest News\n- latest item";
        let (section, _) = extract_news(text);

        // "Latest News" is tried first even though "Recent News" appears earlier
        assert_eq!(section.expect("news section").items, vec!["latest item"]);
    }

    #[test]
    fn test_line_fallback_skips_headers_and_table_rows() {
        let text = "News\nFed holds rates steady\n| A | B |\n## Next";
        let (section, remaining) = extract_news(text);

        let section = section.expect("news section");
        // The header line itself and the plain line are kept; the table row is not
        assert_eq!(section.items, vec!["News", "Fed holds rates steady"]);
        assert_eq!(remaining, "## Next");
    }

    #[test]
    fn test_items_whitespace_normalized() {
        let text = "Latest News\n- Apple   ships\t new chip";
        let (section, _) = extract_news(text);
        assert_eq!(section.expect("news section").items, vec!["Apple ships new chip"]);
    }

    #[test]
    fn test_no_news_section() {
        let (section, remaining) = extract_news("just prose here");
        assert!(section.is_none());
        assert_eq!(remaining, "just prose here");
    }
}
