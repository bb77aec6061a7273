//! Section and entry listing

use std::path::Path;

use colored::Colorize;
use ini_form::EditSession;

use crate::error::Result;

/// Print every section and entry, optionally with their comments.
pub fn run_list(file: &Path, comments: bool) -> Result<()> {
    let session = EditSession::load(file)?;

    for section in &session.document().sections {
        println!("{}", format!("[{}]", section.name).bold());
        if comments && !section.comment.is_empty() {
            for line in section.comment.lines() {
                println!("  {}", format!("; {line}").dimmed());
            }
        }
        for entry in &section.entries {
            println!("  {}={}", entry.name.green(), entry.value);
            if comments && !entry.comment.is_empty() {
                for line in entry.comment.lines() {
                    println!("    {}", format!("; {line}").dimmed());
                }
            }
        }
        println!();
    }

    Ok(())
}
