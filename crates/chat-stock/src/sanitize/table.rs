//! Table extraction
//!
//! Detects markdown-style and simple HTML-style tables embedded in text,
//! parses them into header/row structures, and removes them from the
//! running text. Parse results are tagged explicitly: a span either
//! becomes a [`Table`] or falls back to its raw text, and the caller
//! chooses the render path per outcome.
//!
//! The HTML pass runs first; the markdown pass scans what is left. Within
//! each pass, outcomes come back in the order the spans were encountered.

use regex::Regex;
use std::sync::LazyLock;

/// A parsed table: ordered headers plus rows of equal width
///
/// Every row holds exactly `headers.len()` cells; rows with mismatched
/// column counts are dropped during parsing, not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column headers
    pub headers: Vec<String>,
    /// Data rows, each as wide as the header
    pub rows: Vec<Vec<String>>,
}

/// Outcome of parsing one table span
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOutcome {
    /// The span parsed into a structured table
    Parsed(Table),
    /// The span did not parse; render it as-is
    Unparsed(String),
}

/// Result of a table extraction pass over a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableExtraction {
    /// Outcomes in encounter order (HTML spans before markdown spans)
    pub outcomes: Vec<TableOutcome>,
    /// The text with every matched span removed
    pub remaining: String,
}

static HTML_TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<table>.*?</table>").expect("valid pattern"));
static HTML_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<tr>(.*?)</tr>").expect("valid pattern"));
static HTML_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<th>(.*?)</th>").expect("valid pattern"));
static HTML_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<td>(.*?)</td>").expect("valid pattern"));

/// Extract all tables from the text
///
/// Every matched span (HTML `<table>` element or markdown pipe block with a
/// separator row) is removed from the returned text whether or not it
/// parsed. Malformed spans become [`TableOutcome::Unparsed`] (HTML) or are
/// dropped without an outcome (markdown blocks with no surviving rows).
pub fn extract_tables(text: &str) -> TableExtraction {
    let mut outcomes = Vec::new();

    // HTML pass
    let mut after_html = String::with_capacity(text.len());
    let mut last = 0;
    for m in HTML_TABLE.find_iter(text) {
        after_html.push_str(&text[last..m.start()]);
        last = m.end();

        match parse_html_table(m.as_str()) {
            Some(table) => outcomes.push(TableOutcome::Parsed(table)),
            None => outcomes.push(TableOutcome::Unparsed(m.as_str().to_string())),
        }
    }
    after_html.push_str(&text[last..]);

    // Markdown pass over what the HTML pass left behind
    let (md_outcomes, remaining) = extract_markdown_tables(&after_html);
    outcomes.extend(md_outcomes);

    TableExtraction {
        outcomes,
        remaining: remaining.trim().to_string(),
    }
}

/// Parse one `<table>...</table>` span
///
/// Headers come from `<th>` cells of the first row, data from `<td>` cells
/// of the rest. Anything structurally off (no headers, no data rows,
/// inconsistent widths) rejects the whole span.
fn parse_html_table(span: &str) -> Option<Table> {
    let rows: Vec<&str> = HTML_ROW
        .captures_iter(span)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();
    if rows.len() < 2 {
        return None;
    }

    let headers: Vec<String> = HTML_HEADER
        .captures_iter(rows[0])
        .filter_map(|c| c.get(1).map(|m| m.as_str().trim().to_string()))
        .collect();
    if headers.is_empty() {
        return None;
    }

    let mut data = Vec::new();
    for row in &rows[1..] {
        let cells: Vec<String> = HTML_CELL
            .captures_iter(row)
            .filter_map(|c| c.get(1).map(|m| m.as_str().trim().to_string()))
            .collect();
        if cells.is_empty() {
            continue;
        }
        if cells.len() != headers.len() {
            return None;
        }
        data.push(cells);
    }

    if data.is_empty() {
        return None;
    }

    Some(Table {
        headers,
        rows: data,
    })
}

/// Scan for markdown table blocks: group consecutive pipe lines, require a
/// separator as the second line, keep rows whose width matches the header
fn extract_markdown_tables(text: &str) -> (Vec<TableOutcome>, String) {
    let mut outcomes = Vec::new();
    let mut kept: Vec<&str> = Vec::new();

    let lines: Vec<&str> = text.split('\n').collect();
    let mut i = 0;
    while i < lines.len() {
        if !is_pipe_line(lines[i]) {
            kept.push(lines[i]);
            i += 1;
            continue;
        }

        let start = i;
        while i < lines.len() && is_pipe_line(lines[i]) {
            i += 1;
        }
        let block = &lines[start..i];

        if block.len() >= 2 && is_separator_line(block[1]) {
            // A matched block is removed whether or not rows survive
            if block.len() >= 3 {
                if let Some(table) = parse_markdown_block(block) {
                    outcomes.push(TableOutcome::Parsed(table));
                }
            }
        } else {
            // Pipe lines without a separator row are not a table
            kept.extend_from_slice(block);
        }
    }

    (outcomes, kept.join("\n"))
}

fn is_pipe_line(line: &str) -> bool {
    line.trim_start().starts_with('|')
}

/// Separator rows contain only pipes, dashes, colons, and spaces
fn is_separator_line(line: &str) -> bool {
    let t = line.trim();
    t.starts_with('|')
        && t.contains('-')
        && t.chars().all(|c| matches!(c, '|' | '-' | ':' | ' '))
}

/// Parse a pipe block: header, skipped separator, width-checked data rows
fn parse_markdown_block(block: &[&str]) -> Option<Table> {
    let headers = split_cells(block[0]);
    if headers.is_empty() {
        return None;
    }

    let rows: Vec<Vec<String>> = block[2..]
        .iter()
        .map(|line| split_cells(line))
        .filter(|row| row.len() == headers.len())
        .collect();

    if rows.is_empty() {
        return None;
    }

    Some(Table { headers, rows })
}

fn split_cells(line: &str) -> Vec<String> {
    line.trim()
        .trim_matches('|')
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_markdown_table() {
        let text = "Intro\n| A | B |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |\nOutro";
        let extraction = extract_tables(text);

        assert_eq!(extraction.outcomes.len(), 1);
        match &extraction.outcomes[0] {
            TableOutcome::Parsed(table) => {
                assert_eq!(table.headers, vec!["A", "B"]);
                assert_eq!(table.rows.len(), 2);
                assert_eq!(table.rows[0], vec!["1", "2"]);
                assert_eq!(table.rows[1], vec!["3", "4"]);
            }
            TableOutcome::Unparsed(_) => panic!("Expected parsed table"),
        }
        assert_eq!(extraction.remaining, "Intro\nOutro");
    }

    #[test]
    fn test_mismatched_row_dropped_not_table() {
        let text = "| A | B |\n|---|---|\n| 1 | 2 |\n| only one |\n";
        let extraction = extract_tables(text);

        assert_eq!(extraction.outcomes.len(), 1);
        match &extraction.outcomes[0] {
            TableOutcome::Parsed(table) => {
                // The short row is dropped; the valid row survives
                assert_eq!(table.rows, vec![vec!["1".to_string(), "2".to_string()]]);
            }
            TableOutcome::Unparsed(_) => panic!("Expected parsed table"),
        }
        assert!(extraction.remaining.is_empty());
    }

    #[test]
    fn test_no_surviving_rows_still_removes_span() {
        let text = "before\n| A | B |\n|---|---|\n| only one |\nafter";
        let extraction = extract_tables(text);

        // No table produced, but the span is gone from the text
        assert!(extraction.outcomes.is_empty());
        assert_eq!(extraction.remaining, "before\nafter");
    }

    #[test]
    fn test_header_and_separator_only_removed() {
        let text = "before\n| A | B |\n|---|---|\nafter";
        let extraction = extract_tables(text);

        assert!(extraction.outcomes.is_empty());
        assert_eq!(extraction.remaining, "before\nafter");
    }

    #[test]
    fn test_pipe_lines_without_separator_kept() {
        let text = "| not | a |\n| table | here |";
        let extraction = extract_tables(text);

        assert!(extraction.outcomes.is_empty());
        assert_eq!(extraction.remaining, text);
    }

    #[test]
    fn test_html_table_parsed() {
        let text = "prose <table><tr><th>Metric</th><th>Value</th></tr>\
                    <tr><td>P/E</td><td>27.4</td></tr></table> more prose";
        let extraction = extract_tables(text);

        assert_eq!(extraction.outcomes.len(), 1);
        match &extraction.outcomes[0] {
            TableOutcome::Parsed(table) => {
                assert_eq!(table.headers, vec!["Metric", "Value"]);
                assert_eq!(table.rows, vec![vec!["P/E".to_string(), "27.4".to_string()]]);
            }
            TableOutcome::Unparsed(_) => panic!("Expected parsed table"),
        }
        assert_eq!(extraction.remaining, "prose  more prose");
    }

    #[test]
    fn test_malformed_html_falls_back_raw() {
        // No header cells: the span is removed but rendered raw
        let text = "<table><tr><td>1</td></tr><tr><td>2</td></tr></table>";
        let extraction = extract_tables(text);

        assert_eq!(extraction.outcomes.len(), 1);
        assert!(matches!(&extraction.outcomes[0], TableOutcome::Unparsed(span) if span == text));
        assert!(extraction.remaining.is_empty());
    }

    #[test]
    fn test_html_inconsistent_widths_fall_back_raw() {
        let text = "<table><tr><th>A</th><th>B</th></tr>\
                    <tr><td>1</td></tr></table>";
        let extraction = extract_tables(text);

        assert_eq!(extraction.outcomes.len(), 1);
        assert!(matches!(extraction.outcomes[0], TableOutcome::Unparsed(_)));
    }

    #[test]
    fn test_html_before_markdown_order() {
        let text = "| M | N |\n|---|---|\n| 5 | 6 |\n\n\
                    <table><tr><th>A</th></tr><tr><td>1</td></tr></table>";
        let extraction = extract_tables(text);

        assert_eq!(extraction.outcomes.len(), 2);
        // HTML outcome first even though the markdown table appears earlier
        match &extraction.outcomes[0] {
            TableOutcome::Parsed(table) => assert_eq!(table.headers, vec!["A"]),
            TableOutcome::Unparsed(_) => panic!("Expected parsed HTML table"),
        }
        match &extraction.outcomes[1] {
            TableOutcome::Parsed(table) => assert_eq!(table.headers, vec!["M", "N"]),
            TableOutcome::Unparsed(_) => panic!("Expected parsed markdown table"),
        }
    }

    #[test]
    fn test_no_tables() {
        let extraction = extract_tables("just prose");
        assert!(extraction.outcomes.is_empty());
        assert_eq!(extraction.remaining, "just prose");
    }
}
