//! Single-pass permissive parser.
//!
//! One forward scan over the physical lines. Lines are trimmed for
//! classification only; the raw document keeps the original text. Anything
//! that is not a recognizable header or entry is skipped, never rejected:
//! hand-edited files with stray content must still load.

use crate::comment::leading_comment_block;
use crate::model::{ConfigDocument, ConfigEntry, ConfigSection, RawDocument};

/// Parse configuration text into the paired model and raw document.
///
/// Permissive by design:
/// - entries before any `[section]` header are dropped;
/// - an unterminated `[` line is ignored like any other non-matching line;
/// - lines without `=` outside headers are ignored.
pub fn parse(text: &str) -> (ConfigDocument, RawDocument) {
    let raw = RawDocument::from_text(text);
    let mut sections: Vec<ConfigSection> = Vec::new();

    for (i, line) in raw.lines().iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(';') {
            continue;
        }

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            let name = &trimmed[1..trimmed.len() - 1];
            sections.push(ConfigSection {
                name: name.to_string(),
                comment: leading_comment_block(raw.lines(), i),
                source_line: i,
                entries: Vec::new(),
            });
        } else if let Some((key, rest)) = trimmed.split_once('=') {
            let Some(section) = sections.last_mut() else {
                tracing::debug!(line = i, "entry before any section header, dropped");
                continue;
            };

            let rest = rest.trim();
            let (value, inline_comment) = match rest.split_once(';') {
                Some((value, inline)) => (value.trim(), inline.trim()),
                None => (rest, ""),
            };

            let leading = leading_comment_block(raw.lines(), i);
            let comment = if leading.is_empty() {
                inline_comment.to_string()
            } else if inline_comment.is_empty() {
                leading
            } else {
                format!("{leading}\n{inline_comment}")
            };

            section.entries.push(ConfigEntry {
                name: key.trim().to_string(),
                value: value.to_string(),
                comment,
                inline_comment: inline_comment.to_string(),
                source_line: i,
            });
        }
    }

    (ConfigDocument { sections }, raw)
}
