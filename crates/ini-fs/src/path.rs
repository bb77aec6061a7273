//! File-name validation

use std::path::Path;

use crate::{Error, Result};

/// Require `path` to carry exactly the expected file name.
pub fn validate_file_name(path: &Path, expected: &str) -> Result<()> {
    let actual = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if actual != expected {
        return Err(Error::UnexpectedFileName {
            expected: expected.to_string(),
            actual,
        });
    }
    Ok(())
}
