//! Single-value lookup

use std::path::Path;

use ini_form::EditSession;

use crate::error::{CliError, Result};

/// Print the value of one entry. Duplicate keys resolve to the last
/// occurrence, matching common INI semantics.
pub fn run_get(file: &Path, section: &str, key: &str) -> Result<()> {
    let session = EditSession::load(file)?;

    let entry = session
        .document()
        .entry(section, key)
        .ok_or_else(|| CliError::user(format!("no entry '{key}' in section '{section}'")))?;

    println!("{}", entry.value);
    Ok(())
}
