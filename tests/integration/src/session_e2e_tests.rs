//! End-to-end session tests: load from disk, edit, save atomically, reload.

use ini_form::{EditSession, ValueKind, classify_value};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const FIXTURE: &str = include_str!("../../../test-fixtures/CreationKitPlatformExtended.ini");
const FILE_NAME: &str = "CreationKitPlatformExtended.ini";

fn fixture_on_disk(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join(FILE_NAME);
    std::fs::write(&path, FIXTURE).unwrap();
    path
}

#[test]
fn test_load_edit_save_reload_cycle() {
    let dir = TempDir::new().unwrap();
    let path = fixture_on_disk(&dir);

    let mut session = EditSession::load_named(&path, FILE_NAME).unwrap();
    session.stage("CreationKit", "bUIDarkTheme", "false");
    session.stage("Graphics", "uHeight", "1440");
    session.save().unwrap();

    let reloaded = EditSession::load(&path).unwrap();
    assert_eq!(
        reloaded.document().entry("CreationKit", "bUIDarkTheme").unwrap().value,
        "false"
    );
    assert_eq!(reloaded.document().entry("Graphics", "uHeight").unwrap().value, "1440");

    // Comments and untouched lines survive the cycle byte-for-byte.
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("; Creation Kit Platform Extended\n"));
    assert!(text.contains("nCharset=204\t\t\t; RUSSIAN_CHARSET\n"));
    assert!(text.contains("\tuWidth=1920\n"));
}

#[test]
fn test_save_with_no_edits_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let path = fixture_on_disk(&dir);

    let mut session = EditSession::load(&path).unwrap();
    session.save().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), FIXTURE);
}

#[test]
fn test_classification_of_fixture_fields() {
    let dir = TempDir::new().unwrap();
    let path = fixture_on_disk(&dir);
    let session = EditSession::load(&path).unwrap();

    let kind_of = |section: &str, key: &str| {
        let entry = session.document().entry(section, key).unwrap();
        classify_value(section, key, &entry.value)
    };

    assert_eq!(kind_of("CreationKit", "bUIDarkTheme"), ValueKind::Boolean);
    assert!(matches!(kind_of("CreationKit", "nCharset"), ValueKind::Enum { .. }));
    assert!(matches!(kind_of("CreationKit", "uUIDarkThemeId"), ValueKind::Enum { .. }));
    assert!(matches!(kind_of("Graphics", "uWidth"), ValueKind::BoundedInteger { .. }));
    // Pinned overrides.
    assert_eq!(kind_of("Hotkeys", "HotkeySave"), ValueKind::FreeText);
    assert_eq!(kind_of("Log", "sOutputFile"), ValueKind::FreeText);
    assert_eq!(kind_of("Facegen", "uTintMaskResolution"), ValueKind::FreeText);
}

#[test]
fn test_two_edit_rounds_accumulate_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = fixture_on_disk(&dir);

    let mut session = EditSession::load(&path).unwrap();
    session.stage("Graphics", "uWidth", "2560");
    session.save().unwrap();
    session.stage("Graphics", "uHeight", "1440");
    session.save().unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\tuWidth=2560\n"));
    assert!(text.contains("\tuHeight=1440\n"));
}
