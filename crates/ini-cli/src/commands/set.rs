//! Value updates

use std::path::Path;

use colored::Colorize;
use ini_form::EditSession;

use crate::error::{CliError, Result};

/// Parse a `SECTION.KEY=VALUE` edit specification.
fn parse_edit_spec(spec: &str) -> Result<(&str, &str, &str)> {
    let invalid = || CliError::user(format!("invalid edit '{spec}': expected SECTION.KEY=VALUE"));

    let (target, value) = spec.split_once('=').ok_or_else(invalid)?;
    let (section, key) = target.split_once('.').ok_or_else(invalid)?;
    if section.is_empty() || key.is_empty() {
        return Err(invalid());
    }
    Ok((section, key, value))
}

/// Stage the given edits and save the file atomically.
///
/// An edit addressing an entry that does not exist is rejected up front;
/// the core writer would ignore it and the file would silently not change.
pub fn run_set(
    file: &Path,
    edits: &[String],
    dry_run: bool,
    expect_name: Option<&str>,
) -> Result<()> {
    if let Some(name) = expect_name {
        ini_fs::validate_file_name(file, name)?;
    }
    let mut session = EditSession::load(file)?;

    for spec in edits {
        let (section, key, value) = parse_edit_spec(spec)?;
        if session.document().entry(section, key).is_none() {
            return Err(CliError::user(format!(
                "no entry '{key}' in section '{section}'"
            )));
        }
        session.stage(section, key, value);
    }

    if dry_run {
        print!("{}", session.rendered()?);
        return Ok(());
    }

    session.save()?;
    println!("{} {}", "updated".green().bold(), file.display());
    Ok(())
}
