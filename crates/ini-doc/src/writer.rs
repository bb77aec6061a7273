//! Line-addressed value write-back.
//!
//! Given the original raw lines and a set of `(section, key) -> value`
//! edits, produces new raw lines where only the addressed lines change.
//! Comments, blank lines, and unaddressed lines survive byte-for-byte.

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::model::{ConfigDocument, RawDocument};

/// Pending value edits keyed by `(section name, entry name)`.
///
/// Callers may over-supply pairs that are not present in the document;
/// those are ignored at render time.
#[derive(Debug, Clone, Default)]
pub struct EditSet {
    edits: HashMap<(String, String), String>,
}

impl EditSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a new value for `(section, key)`, replacing any prior stage.
    pub fn insert(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.edits
            .insert((section.into(), key.into()), value.into());
    }

    /// The staged value for `(section, key)`, if any.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.edits
            .get(&(section.to_string(), key.to_string()))
            .map(String::as_str)
    }

    /// Drop a staged edit, returning its value.
    pub fn remove(&mut self, section: &str, key: &str) -> Option<String> {
        self.edits.remove(&(section.to_string(), key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Iterate staged edits as `((section, key), value)`.
    pub fn iter(&self) -> impl Iterator<Item = (&(String, String), &String)> {
        self.edits.iter()
    }
}

/// Apply `edits` to a clone of `raw`, addressing lines through the entry
/// positions recorded in `document`.
///
/// The original raw document is never mutated, so a save can be retried
/// with different edits without re-parsing. Each rewritten line is the
/// entry's key, the new value, the original inline comment (when present)
/// in a fixed `\t\t\t; ` layout, and the original line's leading
/// whitespace carried over verbatim.
///
/// # Errors
///
/// Returns [`Error::DocumentMismatch`] when an entry's source line falls
/// outside the raw document, which means the model was paired with the
/// wrong raw lines. Nothing is corrupted: the render aborts whole.
pub fn render(raw: &RawDocument, edits: &EditSet, document: &ConfigDocument) -> Result<RawDocument> {
    let mut lines = raw.lines().to_vec();
    let mut applied: HashSet<(&str, &str)> = HashSet::new();

    for section in &document.sections {
        for entry in &section.entries {
            let Some(new_value) = edits.get(&section.name, &entry.name) else {
                continue;
            };

            let original = lines.get(entry.source_line).ok_or(Error::DocumentMismatch {
                line: entry.source_line,
                line_count: lines.len(),
            })?;

            let indent_end = original.len() - original.trim_start().len();
            let mut replacement = format!("{}{}={}", &original[..indent_end], entry.name, new_value);
            if !entry.inline_comment.is_empty() {
                replacement.push_str("\t\t\t; ");
                replacement.push_str(&entry.inline_comment);
            }
            replacement.push('\n');

            applied.insert((section.name.as_str(), entry.name.as_str()));
            lines[entry.source_line] = replacement;
        }
    }

    if applied.len() < edits.len() {
        tracing::debug!(
            staged = edits.len(),
            applied = applied.len(),
            "edits with no matching entry were ignored"
        );
    }

    Ok(RawDocument::from_lines(lines))
}
