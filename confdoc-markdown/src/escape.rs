//! Markdown escaping helpers.

/// Wrap text in an inline code span.
///
/// Text containing a backtick gets a double-backtick fence with padding.
pub fn code(text: &str) -> String {
    if text.contains('`') {
        format!("`` {text} ``")
    } else {
        format!("`{text}`")
    }
}

/// Make text safe for a single table cell: pipes are escaped and line
/// breaks collapse to spaces.
pub fn table_cell(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}

/// Join items as a comma separated list of code spans.
pub fn code_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|s| code(s.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}
