//! Generic note names
//!
//! `n{i}` names one equal division of the octave, independent of spelling.
//! All arithmetic in the engine happens on these indices.

use crate::models::accidental::strip_accidental;

pub struct GenericSystem;

impl GenericSystem {
    /// Parse a bare `n{i}` stem
    pub fn parse_stem(stem: &str) -> Option<usize> {
        let digits = stem.strip_prefix('n')?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    /// Index of a generic name with an optional accidental, wrapped into
    /// the temperament
    pub fn index_of(name: &str, temperament: usize) -> Option<usize> {
        if temperament == 0 {
            return None;
        }
        let (stem, offset) = strip_accidental(name);
        let index = Self::parse_stem(stem)? as i64 + offset as i64;
        Some(index.rem_euclid(temperament as i64) as usize)
    }

    pub fn name(index: usize) -> String {
        format!("n{}", index)
    }

    /// All generic names of a temperament, `n0..n{N-1}`
    pub fn note_names(temperament: usize) -> Vec<String> {
        (0..temperament).map(Self::name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(GenericSystem::parse_stem("n0"), Some(0));
        assert_eq!(GenericSystem::parse_stem("n11"), Some(11));
        assert_eq!(GenericSystem::parse_stem("n"), None);
        assert_eq!(GenericSystem::parse_stem("n+1"), None);
        assert_eq!(GenericSystem::parse_stem("ni"), None);
    }

    #[test]
    fn test_index_with_accidentals_wraps() {
        assert_eq!(GenericSystem::index_of("n10#", 12), Some(11));
        assert_eq!(GenericSystem::index_of("n10x", 12), Some(0));
        assert_eq!(GenericSystem::index_of("n0b", 12), Some(11));
        assert_eq!(GenericSystem::index_of("n25", 21), Some(4));
        assert_eq!(GenericSystem::index_of("n3", 0), None);
    }

    #[test]
    fn test_note_names() {
        let names = GenericSystem::note_names(5);
        assert_eq!(names, vec!["n0", "n1", "n2", "n3", "n4"]);
    }
}
