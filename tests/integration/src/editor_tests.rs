//! End-to-end parse/render tests over a realistic configuration file.

use ini_doc::{EditSet, parse, render};
use pretty_assertions::assert_eq;

const FIXTURE: &str = include_str!("../../../test-fixtures/CreationKitPlatformExtended.ini");

#[test]
fn test_fixture_parses_into_expected_sections() {
    let (doc, raw) = parse(FIXTURE);

    let names: Vec<&str> = doc.sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["CreationKit", "Log", "Hotkeys", "Facegen", "Graphics"]
    );
    assert_eq!(raw.to_text(), FIXTURE);
}

#[test]
fn test_fixture_comments_are_attached() {
    let (doc, _) = parse(FIXTURE);

    let creation_kit = doc.section("CreationKit").unwrap();
    assert_eq!(
        creation_kit.comment,
        "Creation Kit Platform Extended\nMain configuration file"
    );

    let charset = doc.entry("CreationKit", "nCharset").unwrap();
    assert_eq!(charset.value, "204");
    assert_eq!(charset.inline_comment, "RUSSIAN_CHARSET");
    assert_eq!(
        charset.comment,
        "Charset used for plugin strings\nRUSSIAN_CHARSET"
    );

    let theme = doc.entry("CreationKit", "uUIDarkThemeId").unwrap();
    assert_eq!(theme.inline_comment, "0 - Lighter, 1 - Darker, 2 - Custom");
}

#[test]
fn test_zero_edit_render_reproduces_the_fixture() {
    let (doc, raw) = parse(FIXTURE);
    let rendered = render(&raw, &EditSet::new(), &doc).unwrap();
    assert_eq!(rendered.to_text(), FIXTURE);
}

#[test]
fn test_editing_a_value_keeps_every_other_byte() {
    let (doc, raw) = parse(FIXTURE);

    let mut edits = EditSet::new();
    edits.insert("CreationKit", "uUIDarkThemeId", "2");
    let rendered = render(&raw, &edits, &doc).unwrap();

    let expected = FIXTURE.replace(
        "uUIDarkThemeId=1\t\t\t; 0 - Lighter, 1 - Darker, 2 - Custom",
        "uUIDarkThemeId=2\t\t\t; 0 - Lighter, 1 - Darker, 2 - Custom",
    );
    assert_eq!(rendered.to_text(), expected);
}

#[test]
fn test_editing_an_indented_entry_preserves_the_tab() {
    let (doc, raw) = parse(FIXTURE);

    let mut edits = EditSet::new();
    edits.insert("Graphics", "uWidth", "2560");
    let rendered = render(&raw, &edits, &doc).unwrap();

    let line = rendered.line(doc.entry("Graphics", "uWidth").unwrap().source_line);
    assert_eq!(line, Some("\tuWidth=2560\n"));
}

#[test]
fn test_multiple_edits_in_one_render() {
    let (doc, raw) = parse(FIXTURE);

    let mut edits = EditSet::new();
    edits.insert("Graphics", "uWidth", "2560");
    edits.insert("Graphics", "uHeight", "1440");
    edits.insert("CreationKit", "bUIDarkTheme", "false");
    let rendered = render(&raw, &edits, &doc).unwrap();
    let text = rendered.to_text();

    assert!(text.contains("\tuWidth=2560\n"));
    assert!(text.contains("\tuHeight=1440\n"));
    assert!(text.contains("bUIDarkTheme=false\n"));
    // Untouched neighbours survive.
    assert!(text.contains("bUIClassicTheme=false\n"));
    assert!(text.contains("; Output file for diagnostic messages\n"));
}
