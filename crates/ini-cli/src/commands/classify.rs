//! Editing-kind overview

use std::path::Path;

use colored::Colorize;
use ini_form::{Choice, EditSession, ValueKind, classify_value};

use crate::error::Result;

/// Print how each entry's value would be presented for editing.
pub fn run_classify(file: &Path) -> Result<()> {
    let session = EditSession::load(file)?;

    for section in &session.document().sections {
        for entry in &section.entries {
            let kind = classify_value(&section.name, &entry.name, &entry.value);
            let kind_text = match kind {
                ValueKind::Boolean => "boolean".to_string(),
                ValueKind::BoundedInteger { max } => format!("integer 0..={max}"),
                ValueKind::Enum { choices } => match Choice::for_value(choices, &entry.value) {
                    Some(choice) => format!("enum: {}", choice.label),
                    None => format!("enum ({} choices)", choices.len()),
                },
                ValueKind::FreeText => "text".to_string(),
            };
            println!(
                "{:<40} {:<20} {}",
                format!("{}.{}", section.name, entry.name),
                kind_text.cyan(),
                entry.value
            );
        }
    }

    Ok(())
}
