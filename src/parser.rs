use std::sync::OnceLock;

use regex::Regex;

use crate::segment::{ListItem, Table};

fn re_bullet() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[-*+]\s+(.+)$").unwrap())
}

fn re_numbered() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)\.\s+(.+)$").unwrap())
}

fn re_table_separator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\|?[\s\-:|]+\|?$").unwrap())
}

/// Parse indented bullet/numbered lines into list items.
///
/// Lines that match neither marker are kept verbatim as plain items. Blank
/// lines are dropped and do not reset nesting. Level jumps and non-sequential
/// numbering are accepted as-is.
pub fn parse_list(markdown: &str) -> Vec<ListItem> {
    let mut items = Vec::new();
    for line in markdown.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let leading = line.chars().take_while(|&c| c == ' ').count();
        let level = leading / 2;
        let trimmed = line.trim();
        if let Some(caps) = re_bullet().captures(trimmed) {
            items.push(ListItem {
                text: caps[1].to_string(),
                level,
                numbered: false,
            });
        } else if let Some(caps) = re_numbered().captures(trimmed) {
            items.push(ListItem {
                text: caps[2].to_string(),
                level,
                numbered: true,
            });
        } else {
            items.push(ListItem {
                text: trimmed.to_string(),
                level,
                numbered: false,
            });
        }
    }
    items
}

/// Parse a pipe-delimited table; `None` signals malformed table markup.
///
/// Needs a header line plus a separator line of pipes/hyphens/colons. Data
/// lines without a single `|` are skipped. Rows are padded with empty cells
/// or truncated to the header width.
pub fn parse_table(markdown: &str) -> Option<Table> {
    let lines: Vec<&str> = markdown
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    if lines.len() < 2 {
        return None;
    }
    if !re_table_separator().is_match(lines[1]) {
        return None;
    }

    let headers = split_cells(lines[0]);
    let mut rows = Vec::new();
    for line in &lines[2..] {
        if !line.contains('|') {
            continue;
        }
        let mut cells = split_cells(line);
        cells.resize(headers.len(), String::new());
        rows.push(cells);
    }
    Some(Table { headers, rows })
}

fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_list_with_nesting() {
        let items = parse_list("- top\n  - nested");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text, "top");
        assert_eq!(items[0].level, 0);
        assert!(!items[0].numbered);
        assert_eq!(items[1].text, "nested");
        assert_eq!(items[1].level, 1);
    }

    #[test]
    fn numbered_list() {
        let items = parse_list("1. first\n2. second");
        assert!(items[0].numbered);
        assert_eq!(items[0].text, "first");
        assert!(items[1].numbered);
        assert_eq!(items[1].text, "second");
    }

    #[test]
    fn plain_line_kept_verbatim() {
        let items = parse_list("  not a marker");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "not a marker");
        assert_eq!(items[0].level, 1);
        assert!(!items[0].numbered);
    }

    #[test]
    fn blank_lines_do_not_reset_nesting() {
        let items = parse_list("- a\n\n    - deep");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].level, 2);
    }

    #[test]
    fn level_jumps_are_preserved() {
        let items = parse_list("- zero\n      - three");
        assert_eq!(items[0].level, 0);
        assert_eq!(items[1].level, 3);
    }

    #[test]
    fn non_sequential_numbering_is_accepted() {
        let items = parse_list("7. seven\n2. two");
        assert_eq!(items[0].text, "seven");
        assert!(items[1].numbered);
    }

    #[test]
    fn alternate_bullet_markers() {
        let items = parse_list("* star\n+ plus");
        assert_eq!(items[0].text, "star");
        assert_eq!(items[1].text, "plus");
    }

    #[test]
    fn empty_input_yields_no_items() {
        assert!(parse_list("\n\n").is_empty());
    }

    #[test]
    fn simple_table() {
        let table = parse_table("| A | B |\n|---|---|\n| 1 | 2 |").unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows, vec![vec!["1", "2"]]);
    }

    #[test]
    fn single_line_is_rejected() {
        assert!(parse_table("just one line").is_none());
    }

    #[test]
    fn missing_separator_is_rejected() {
        assert!(parse_table("| A | B |\n| 1 | 2 |").is_none());
    }

    #[test]
    fn separator_with_alignment_colons() {
        let table = parse_table("| A | B |\n|:--|--:|\n| 1 | 2 |").unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
    }

    #[test]
    fn short_rows_are_padded() {
        let table = parse_table("| A | B | C |\n|---|---|---|\n| 1 |").unwrap();
        assert_eq!(table.rows[0], vec!["1", "", ""]);
    }

    #[test]
    fn long_rows_are_truncated() {
        let table = parse_table("| A | B |\n|---|---|\n| 1 | 2 | 3 | 4 |").unwrap();
        assert_eq!(table.rows[0], vec!["1", "2"]);
    }

    #[test]
    fn pipeless_data_line_is_skipped() {
        let table = parse_table("| A | B |\n|---|---|\nnot a row\n| 1 | 2 |").unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0], vec!["1", "2"]);
    }

    #[test]
    fn blank_lines_between_rows_are_ignored() {
        let table = parse_table("| A |\n|---|\n\n| 1 |\n\n| 2 |").unwrap();
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn pipes_without_leading_or_trailing_bar() {
        let table = parse_table("A | B\n--- | ---\n1 | 2").unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows, vec![vec!["1", "2"]]);
    }
}
