//! Value classification for editing front ends.
//!
//! Decides how a value should be presented for editing: as a boolean
//! toggle, a bounded number, a fixed choice set, or free text. Hard-coded
//! per-field overrides are checked first, then value-shape heuristics.

/// One selectable option of an enumerated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Display label.
    pub label: &'static str,
    /// Value written to the file.
    pub value: i64,
}

impl Choice {
    /// Find the choice whose stored value matches the raw string, for
    /// preselecting the active option.
    pub fn for_value<'a>(choices: &'a [Choice], raw: &str) -> Option<&'a Choice> {
        let value: i64 = raw.trim().parse().ok()?;
        choices.iter().find(|c| c.value == value)
    }
}

/// How a value should be edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `true`/`false` toggle.
    Boolean,
    /// Non-negative integer with an upper bound.
    BoundedInteger { max: u32 },
    /// One of a fixed set of named numeric constants.
    Enum { choices: &'static [Choice] },
    /// Anything else: edited as plain text.
    FreeText,
}

/// Upper bound applied to plain numeric fields.
pub const INTEGER_MAX: u32 = 999_999;

/// Windows charset constants selectable for `nCharset`.
pub const CHARSET_CHOICES: &[Choice] = &[
    Choice { label: "ANSI_CHARSET", value: 0 },
    Choice { label: "DEFAULT_CHARSET", value: 1 },
    Choice { label: "SYMBOL_CHARSET", value: 2 },
    Choice { label: "SHIFTJIS_CHARSET", value: 128 },
    Choice { label: "HANGEUL_CHARSET", value: 129 },
    Choice { label: "GB2312_CHARSET", value: 134 },
    Choice { label: "CHINESEBIG5_CHARSET", value: 136 },
    Choice { label: "OEM_CHARSET", value: 255 },
    Choice { label: "JOHAB_CHARSET", value: 130 },
    Choice { label: "HEBREW_CHARSET", value: 177 },
    Choice { label: "ARABIC_CHARSET", value: 178 },
    Choice { label: "GREEK_CHARSET", value: 161 },
    Choice { label: "TURKISH_CHARSET", value: 162 },
    Choice { label: "VIETNAMESE_CHARSET", value: 163 },
    Choice { label: "THAI_CHARSET", value: 222 },
    Choice { label: "EASTEUROPE_CHARSET", value: 238 },
    Choice { label: "RUSSIAN_CHARSET", value: 204 },
    Choice { label: "MAC_CHARSET", value: 77 },
    Choice { label: "BALTIC_CHARSET", value: 186 },
];

/// Theme options selectable for `uUIDarkThemeId`.
pub const THEME_CHOICES: &[Choice] = &[
    Choice { label: "Lighter", value: 0 },
    Choice { label: "Darker", value: 1 },
    Choice { label: "Custom", value: 2 },
];

/// Classify a value by `(section, entry, value)`.
///
/// Precedence: per-field overrides first, then the boolean and numeric
/// shape heuristics, free text as the fallback. Hotkey chords and log
/// paths look boolean- or number-shaped often enough that their whole
/// sections are pinned to free text.
pub fn classify_value(section: &str, entry: &str, value: &str) -> ValueKind {
    if section == "Hotkeys" || section == "Log" || entry == "uTintMaskResolution" {
        return ValueKind::FreeText;
    }
    if entry == "nCharset" {
        return ValueKind::Enum { choices: CHARSET_CHOICES };
    }
    if entry == "uUIDarkThemeId" {
        return ValueKind::Enum { choices: THEME_CHOICES };
    }
    if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
        return ValueKind::Boolean;
    }
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        return ValueKind::BoundedInteger { max: INTEGER_MAX };
    }
    ValueKind::FreeText
}
