//! Caller-owned edit session.
//!
//! Replaces ambient mutable state (current file path, collected new
//! values) with one object passed explicitly between load, edit, and save
//! calls. The parse/write core stays stateless; the session owns the
//! paired document + raw lines and the set of values staged for the next
//! save.

use std::path::{Path, PathBuf};

use ini_doc::{ConfigDocument, EditSet, RawDocument, parse, render};

use crate::error::Result;

/// A loaded configuration file plus its pending edits.
#[derive(Debug, Clone)]
pub struct EditSession {
    path: PathBuf,
    document: ConfigDocument,
    raw: RawDocument,
    pending: EditSet,
}

impl EditSession {
    /// Read and parse the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let text = ini_fs::read_text(&path)?;
        let (document, raw) = parse(&text);
        tracing::debug!(
            path = %path.display(),
            sections = document.sections.len(),
            lines = raw.len(),
            "configuration loaded"
        );
        Ok(Self {
            path,
            document,
            raw,
            pending: EditSet::new(),
        })
    }

    /// Load, refusing any file not named exactly `expected_name`.
    pub fn load_named(path: impl AsRef<Path>, expected_name: &str) -> Result<Self> {
        ini_fs::validate_file_name(path.as_ref(), expected_name)?;
        Self::load(path)
    }

    /// Stage a new value for `(section, key)`. Staging the same pair again
    /// replaces the earlier value.
    pub fn stage(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.pending.insert(section, key, value);
    }

    /// Drop a staged value, returning it if one was staged.
    pub fn unstage(&mut self, section: &str, key: &str) -> Option<String> {
        self.pending.remove(section, key)
    }

    /// Edits staged for the next save.
    pub fn pending(&self) -> &EditSet {
        &self.pending
    }

    /// True when a save would change the file.
    pub fn is_dirty(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    pub fn raw(&self) -> &RawDocument {
        &self.raw
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The text a save would write, without touching the file.
    pub fn rendered(&self) -> Result<String> {
        let rendered = render(&self.raw, &self.pending, &self.document)?;
        Ok(rendered.to_text())
    }

    /// Render pending edits and write the result atomically to the
    /// session path, then re-pair: the rendered lines become the session's
    /// raw document, the model is re-parsed from them, and the pending set
    /// clears.
    pub fn save(&mut self) -> Result<()> {
        let rendered = render(&self.raw, &self.pending, &self.document)?;
        let text = rendered.to_text();
        ini_fs::write_text(&self.path, &text)?;

        let (document, raw) = parse(&text);
        self.document = document;
        self.raw = raw;
        self.pending = EditSet::new();
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    /// Save to a different path; the session stays pointed at it.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.path = path.as_ref().to_path_buf();
        self.save()
    }
}
