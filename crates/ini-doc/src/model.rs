//! Document model types.
//!
//! A parse produces two paired values: the [`ConfigDocument`] (sections and
//! entries with their source line indices) and the [`RawDocument`] (the
//! literal file lines). Edits are applied against the raw lines by index,
//! which is what makes byte-exact preservation of everything else possible.

/// The literal, line-indexed original file content.
///
/// Lines keep their trailing newline when the source had one, so
/// concatenating them reproduces the input exactly. Indices are 0-based
/// physical line numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDocument {
    lines: Vec<String>,
}

impl RawDocument {
    /// Split `text` into physical lines, preserving line terminators.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    /// Build a document from already-split lines.
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// All physical lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The line at `index`, if in range.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Number of physical lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the document has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Reassemble the original text verbatim.
    pub fn to_text(&self) -> String {
        self.lines.concat()
    }
}

/// One `Key=Value` pair inside a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    /// Key text, trimmed.
    pub name: String,
    /// Value as a raw string; type interpretation is a caller concern.
    pub value: String,
    /// Leading comment block joined with the inline comment (when both are
    /// present). Empty when the entry has no comments at all.
    pub comment: String,
    /// Trailing comment on the entry's own line, kept separately so the
    /// writer can reconstruct the line.
    pub inline_comment: String,
    /// 0-based physical line index of the `Key=Value` line.
    pub source_line: usize,
}

/// A named group of entries introduced by a `[Name]` header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSection {
    /// Header text between the brackets, not re-trimmed.
    pub name: String,
    /// Leading comment block above the header line.
    pub comment: String,
    /// 0-based physical line index of the header line.
    pub source_line: usize,
    /// Entries in source order. Duplicate keys are kept as separate
    /// entries in encounter order.
    pub entries: Vec<ConfigEntry>,
}

impl ConfigSection {
    /// Look up an entry by key. Returns the last occurrence, so duplicate
    /// keys resolve the way common INI consumers expect.
    pub fn entry(&self, key: &str) -> Option<&ConfigEntry> {
        self.entries.iter().rev().find(|e| e.name == key)
    }
}

/// The parsed document: sections in source order.
///
/// Duplicate section headers are not merged; each `[Name]` occurrence is
/// its own [`ConfigSection`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    pub sections: Vec<ConfigSection>,
}

impl ConfigDocument {
    /// Look up a section by name. Returns the last occurrence.
    pub fn section(&self, name: &str) -> Option<&ConfigSection> {
        self.sections.iter().rev().find(|s| s.name == name)
    }

    /// Look up an entry by section and key, scanning duplicates so the
    /// last occurrence wins.
    pub fn entry(&self, section: &str, key: &str) -> Option<&ConfigEntry> {
        self.sections
            .iter()
            .rev()
            .filter(|s| s.name == section)
            .find_map(|s| s.entry(key))
    }
}
