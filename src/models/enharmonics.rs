//! Enharmonic spelling tables for letter names
//!
//! Exhaustive match tables over the 35 letter spellings (seven letters,
//! five accidentals). They drive scale spelling and the lenient index
//! lookups used when a key or pitch is written with an unusual accidental.

use crate::errors::MusicError;
use crate::models::pitch_systems::western::{ALL_NOTES, CHROMATIC_FLAT, CHROMATIC_SHARP};

/// Respell a note using the next letter up, e.g. `c#` -> `db`
pub fn convert_up(name: &str) -> Option<&'static str> {
    let respelled = match name {
        "cx" => "d", "c#" => "db", "c" => "dbb",
        "dx" => "e", "d#" => "eb", "d" => "ebb",
        "ex" => "f#", "e#" => "f", "e" => "fb",
        "fx" => "g", "f#" => "gb", "f" => "gbb",
        "gx" => "a", "g#" => "ab", "g" => "abb",
        "ax" => "b", "a#" => "bb", "a" => "bbb",
        "bx" => "c#", "b#" => "c", "b" => "cb",
        _ => return None,
    };
    Some(respelled)
}

/// Respell a note using the next letter down, e.g. `db` -> `c#`
pub fn convert_down(name: &str) -> Option<&'static str> {
    let respelled = match name {
        "c" => "b#", "cb" => "b", "cbb" => "a#",
        "d" => "cx", "db" => "c#", "dbb" => "c",
        "e" => "dx", "eb" => "d#", "ebb" => "d",
        "f" => "e#", "fb" => "e", "fbb" => "d#",
        "g" => "fx", "gb" => "f#", "gbb" => "f",
        "a" => "gx", "ab" => "g#", "abb" => "g",
        "b" => "ax", "bb" => "a#", "bbb" => "a",
        _ => return None,
    };
    Some(respelled)
}

/// Sharp-family spelling of a flat or theoretical note
pub fn equivalent_sharp(name: &str) -> Option<&'static str> {
    let respelled = match name {
        "db" => "c#",
        "eb" => "d#",
        "gb" => "f#",
        "ab" => "g#",
        "bb" => "a#",
        "cb" => "b",
        "fb" => "e",
        "e#" => "e#",
        "b#" => "b#",
        _ => return None,
    };
    Some(respelled)
}

/// Flat-family spelling of a sharp or theoretical note
pub fn equivalent_flat(name: &str) -> Option<&'static str> {
    let respelled = match name {
        "c#" => "db",
        "d#" => "eb",
        "f#" => "gb",
        "g#" => "ab",
        "a#" => "bb",
        "e#" => "f",
        "b#" => "c",
        "cb" => "cb",
        "fb" => "fb",
        _ => return None,
    };
    Some(respelled)
}

/// Every other spelling of the same pitch class
pub fn equivalents(name: &str) -> &'static [&'static str] {
    match name {
        "ax" => &["b", "cb"],
        "a#" => &["bb"],
        "a" => &["a", "bbb", "gx"],
        "ab" => &["g#"],
        "abb" => &["g", "fx"],
        "bx" => &["c#"],
        "b#" => &["c", "dbb"],
        "b" => &["b", "cb", "ax"],
        "bb" => &["a#"],
        "bbb" => &["a", "gx"],
        "cx" => &["d"],
        "c#" => &["db"],
        "c" => &["c", "dbb", "b#"],
        "cb" => &["b"],
        "cbb" => &["bb", "a#"],
        "dx" => &["e", "fb"],
        "d#" => &["eb", "fbb"],
        "d" => &["d", "ebb", "cx"],
        "db" => &["c#", "bx"],
        "dbb" => &["c", "b#"],
        "ex" => &["f#", "gb"],
        "e#" => &["f", "gbb"],
        "e" => &["e", "fb", "dx"],
        "eb" => &["d#", "fbb"],
        "ebb" => &["d", "cx"],
        "fx" => &["g", "abb"],
        "f#" => &["gb", "ex"],
        "f" => &["f", "e#", "gbb"],
        "fb" => &["e", "dx"],
        "fbb" => &["eb", "d#"],
        "gx" => &["a", "bbb"],
        "g#" => &["ab"],
        "g" => &["g", "abb", "fx"],
        "gb" => &["f#", "ex"],
        "gbb" => &["f", "e#"],
        _ => &[],
    }
}

fn index_in(name: &str, alphabet: &[&str]) -> Option<usize> {
    alphabet.iter().position(|n| *n == name)
}

/// Resolve a name against an alphabet directly, then through the tables
fn resolve(
    name: &str,
    alphabet: &[&str],
    family: fn(&str) -> Option<&'static str>,
) -> Option<usize> {
    index_in(name, alphabet)
        .or_else(|| family(name).and_then(|n| index_in(n, alphabet)))
        .or_else(|| {
            equivalents(name).iter().find_map(|n| {
                index_in(n, alphabet).or_else(|| family(n).and_then(|m| index_in(m, alphabet)))
            })
        })
}

/// Position of a letter name in the sharp chromatic alphabet
pub fn sharp_index(name: &str) -> Result<usize, MusicError> {
    resolve(name, &CHROMATIC_SHARP, equivalent_sharp)
        .ok_or_else(|| MusicError::NotationError(format!("no sharp index for '{}'", name)))
}

/// Position of a letter name in the flat chromatic alphabet
pub fn flat_index(name: &str) -> Result<usize, MusicError> {
    resolve(name, &CHROMATIC_FLAT, equivalent_flat)
        .ok_or_else(|| MusicError::NotationError(format!("no flat index for '{}'", name)))
}

/// Position of a letter name in the 21-note alphabet
pub fn twenty_one_index(name: &str) -> Option<usize> {
    resolve(name, &ALL_NOTES, |_| None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pitch_systems::{ChromaticNames, WesternSystem};

    #[test]
    fn test_convert_up_down_are_inverse_on_single_accidentals() {
        for name in ["c#", "db", "e#", "fb", "b#", "cb", "g", "a"] {
            if let Some(up) = convert_up(name) {
                if let Some(back) = convert_down(up) {
                    assert_eq!(back, name, "{} -> {} -> {}", name, up, back);
                }
            }
        }
    }

    #[test]
    fn test_equivalents_preserve_pitch_class() {
        for letter in ["a", "b", "c", "d", "e", "f", "g"] {
            for acc in ["bb", "b", "", "#", "x"] {
                let name = format!("{}{}", letter, acc);
                let index = WesternSystem::chromatic_index(&name).unwrap();
                for other in equivalents(&name) {
                    assert_eq!(WesternSystem::chromatic_index(other), Some(index), "{} ~ {}", name, other);
                }
                for respelled in [convert_up(&name), convert_down(&name)].into_iter().flatten() {
                    assert_eq!(WesternSystem::chromatic_index(respelled), Some(index));
                }
            }
        }
    }

    #[test]
    fn test_sharp_and_flat_index() {
        assert_eq!(sharp_index("c#"), Ok(1));
        assert_eq!(sharp_index("db"), Ok(1));
        assert_eq!(sharp_index("b#"), Ok(0));
        assert_eq!(sharp_index("fx"), Ok(7));
        assert_eq!(flat_index("a#"), Ok(10));
        assert_eq!(flat_index("cb"), Ok(11));
        assert_eq!(flat_index("ebb"), Ok(2));
        assert!(matches!(sharp_index("h"), Err(MusicError::NotationError(_))));
        assert!(flat_index("sol").is_err());
    }

    #[test]
    fn test_twenty_one_index() {
        assert_eq!(twenty_one_index("c"), Some(0));
        assert_eq!(twenty_one_index("db"), Some(2));
        assert_eq!(twenty_one_index("cb"), Some(20));
        assert_eq!(twenty_one_index("cx"), Some(3));
        assert_eq!(twenty_one_index("n3"), None);
    }
}
