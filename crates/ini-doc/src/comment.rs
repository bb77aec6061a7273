//! Leading-comment association.
//!
//! A section header or entry line owns the contiguous block of comment
//! lines immediately above it. The scan walks backward over the raw lines
//! and is transparent to blank lines: only a non-blank, non-comment line
//! (or the start of the file) stops it. A comment block sitting directly
//! after a previous entry with no blank separator therefore attaches to
//! the NEXT element, never to the previous one's tail.

/// Collect the leading comment block for the line at `index`.
///
/// Comment lines are returned in top-to-bottom order, marker stripped,
/// newline-joined. Blank lines inside the block are skipped in the join.
pub fn leading_comment_block(lines: &[String], index: usize) -> String {
    let mut collected: Vec<&str> = Vec::new();
    let mut idx = index;
    while idx > 0 {
        let candidate = lines[idx - 1].trim();
        if candidate.starts_with(';') {
            collected.push(strip_marker(candidate));
        } else if !candidate.is_empty() {
            break;
        }
        idx -= 1;
    }
    collected.reverse();
    collected.join("\n")
}

/// Strip the comment marker: the first `;` and at most one whitespace
/// character after it. Further whitespace is part of the comment text.
fn strip_marker(line: &str) -> &str {
    let rest = &line[1..];
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str(),
        _ => rest,
    }
}
