//! Turning a diff into something a person can look at.

use crate::diff_result::DiffResult;
use crate::diff_span::DiffOp;

const INSERT_OPEN: &str = "<ins style=\"background:#e6ffe6;\">";
const DELETE_OPEN: &str = "<del style=\"background:#ffe6e6;\">";

/// Render a diff as an HTML fragment.
///
/// Equal text is wrapped in `<span>`, insertions in `<ins>` and deletions in
/// `<del>`. All text is escaped, so the compared content can never add
/// elements of its own to the page. Newlines are shown as a pilcrow followed
/// by a line break.
pub fn render_html(diff: &DiffResult) -> String {
    let mut html = String::new();
    for span in diff {
        let text = escape_html(&span.text);
        let (open, close) = match span.op {
            DiffOp::Equal => ("<span>", "</span>"),
            DiffOp::Insert => (INSERT_OPEN, "</ins>"),
            DiffOp::Delete => (DELETE_OPEN, "</del>"),
        };
        html.push_str(open);
        html.push_str(&text);
        html.push_str(close);
    }
    html
}

/// Render a diff as plain text with `[-deleted-]` and `{+inserted+}` markers
pub fn render_plain(diff: &DiffResult) -> String {
    let mut out = String::new();
    for span in diff {
        let (open, close) = match span.op {
            DiffOp::Equal => ("", ""),
            DiffOp::Insert => ("{+", "+}"),
            DiffOp::Delete => ("[-", "-]"),
        };
        out.push_str(open);
        out.push_str(&span.text);
        out.push_str(close);
    }
    out
}

/// Escape text for use inside HTML element content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&para;<br>"),
            _ => out.push(c),
        }
    }
    out
}
