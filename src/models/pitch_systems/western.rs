//! Western system pitch implementation
//!
//! The western system uses letter names C-B, and is the only notation
//! with spellings in the 21-division temperament.

use super::ChromaticNames;
use crate::models::notation::NotationKind;

/// Letters in diatonic order
pub const PITCH_LETTERS: [char; 7] = ['c', 'd', 'e', 'f', 'g', 'a', 'b'];

pub const CHROMATIC_SHARP: [&str; 12] =
    ["c", "c#", "d", "d#", "e", "f", "f#", "g", "g#", "a", "a#", "b"];

pub const CHROMATIC_FLAT: [&str; 12] =
    ["c", "db", "d", "eb", "e", "f", "gb", "g", "ab", "a", "bb", "b"];

/// Spellings of the 21-division temperament, one symbol per step
pub const ALL_NOTES: [&str; 21] = [
    "c", "c#", "db", "d", "d#", "eb", "e", "e#", "fb", "f", "f#",
    "gb", "g", "g#", "ab", "a", "a#", "bb", "b", "b#", "cb",
];

/// Western system implementation
pub struct WesternSystem;

impl WesternSystem {
    /// Position of a name's letter in `PITCH_LETTERS`
    pub fn letter_index(name: &str) -> Option<usize> {
        let letter = name.chars().next()?;
        PITCH_LETTERS.iter().position(|l| *l == letter)
    }

    /// Letter steps from `from` up to `to`, in 0..7
    pub fn letter_gap(from: &str, to: &str) -> Option<usize> {
        let a = Self::letter_index(from)?;
        let b = Self::letter_index(to)?;
        Some((b + 7 - a) % 7)
    }

    /// Whether two names are written on the same letter
    pub fn same_letter(a: &str, b: &str) -> bool {
        matches!((a.chars().next(), b.chars().next()), (Some(x), Some(y)) if x == y)
    }
}

impl ChromaticNames for WesternSystem {
    const KIND: NotationKind = NotationKind::Letter;
    const STEMS: [&'static str; 7] = ["c", "d", "e", "f", "g", "a", "b"];
    const SHARP: [&'static str; 12] = CHROMATIC_SHARP;
    const FLAT: [&'static str; 12] = CHROMATIC_FLAT;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_gap_wraps() {
        assert_eq!(WesternSystem::letter_gap("c", "d"), Some(1));
        assert_eq!(WesternSystem::letter_gap("b", "c#"), Some(1));
        assert_eq!(WesternSystem::letter_gap("e", "g#"), Some(2));
        assert_eq!(WesternSystem::letter_gap("a", "a"), Some(0));
        assert_eq!(WesternSystem::letter_gap("h", "c"), None);
    }

    #[test]
    fn test_all_notes_agree_with_chromatic_tables() {
        for name in ALL_NOTES {
            assert!(WesternSystem::chromatic_index(name).is_some(), "{}", name);
        }
        assert!(WesternSystem::same_letter("c#", "cb"));
        assert!(!WesternSystem::same_letter("c#", "db"));
    }
}
