//! Accidentals and pitch-name spelling helpers
//!
//! Pitch names are handled internally in a normalized ASCII form:
//! lowercase, `#`/`x` for sharps, `b`/`bb` for flats. The Unicode
//! glyphs are accepted on input and produced by `display`.

use serde_repr::{Deserialize_repr, Serialize_repr};

pub const SHARP: &str = "♯";
pub const FLAT: &str = "♭";
pub const NATURAL: &str = "♮";
pub const DOUBLE_SHARP: &str = "𝄪";
pub const DOUBLE_FLAT: &str = "𝄫";

/// Semitone offset attached to a letter or syllable stem
#[repr(i8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
pub enum Accidental {
    DoubleFlat = -2,
    Flat = -1,
    Natural = 0,
    Sharp = 1,
    DoubleSharp = 2,
}

impl Accidental {
    pub fn offset(self) -> i32 {
        self as i32
    }

    pub fn from_offset(offset: i32) -> Option<Self> {
        match offset {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    /// Normalized ASCII suffix
    pub fn ascii(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "x",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => DOUBLE_FLAT,
            Accidental::Flat => FLAT,
            Accidental::Natural => "",
            Accidental::Sharp => SHARP,
            Accidental::DoubleSharp => DOUBLE_SHARP,
        }
    }
}

/// Split a trailing accidental off a pitch name
///
/// Returns the bare stem and its semitone offset. Single-character names
/// are never split, so `"b"` is the note B rather than a lone flat.
pub fn strip_accidental(name: &str) -> (&str, i32) {
    let length = name.chars().count();
    if length <= 1 {
        return (name, 0);
    }
    if length > 2 {
        if let Some(stem) = name.strip_suffix("bb") {
            return (stem, -2);
        }
    }

    let suffixes = [
        ("b", -1),
        ("#", 1),
        ("x", 2),
        (DOUBLE_FLAT, -2),
        (FLAT, -1),
        (SHARP, 1),
        (DOUBLE_SHARP, 2),
        (NATURAL, 0),
    ];
    for (suffix, offset) in suffixes {
        if let Some(stem) = name.strip_suffix(suffix) {
            return (stem, offset);
        }
    }
    (name, 0)
}

/// Lowercase a pitch name and rewrite accidental glyphs in ASCII
pub fn normalize(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace(SHARP, "#")
        .replace(DOUBLE_SHARP, "x")
        .replace(FLAT, "b")
        .replace(DOUBLE_FLAT, "bb")
        .replace(NATURAL, "")
}

/// Render a normalized letter name for display, e.g. `c#` -> `C♯`
pub fn display(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let glyph = match chars.as_str() {
        "bb" => DOUBLE_FLAT,
        "b" => FLAT,
        "#" => SHARP,
        "x" => DOUBLE_SHARP,
        other => other,
    };
    format!("{}{}", first.to_uppercase(), glyph)
}
