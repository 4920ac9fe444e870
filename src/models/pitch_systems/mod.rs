//! Pitch system implementations
//!
//! Each system names the twelve chromatic pitches of a 12-division octave
//! from seven diatonic stems plus accidentals. Systems are unit structs
//! carrying their tables as associated constants; `ChromaticNames`
//! supplies the shared lookups.

use crate::models::accidental::strip_accidental;
use crate::models::notation::NotationKind;

pub mod generic;
pub mod number;
pub mod sargam;
pub mod solfege;
pub mod western;

pub use generic::GenericSystem;
pub use number::NumberSystem;
pub use sargam::SargamSystem;
pub use solfege::SolfegeSystem;
pub use western::WesternSystem;

/// Semitone position of each diatonic stem above the first
pub const DIATONIC_STEPS: [usize; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Shared lookups for the stem-plus-accidental notations
pub trait ChromaticNames {
    const KIND: NotationKind;

    /// The seven diatonic stems, first stem at chromatic index 0
    const STEMS: [&'static str; 7];

    /// Chromatic names spelled with sharps
    const SHARP: [&'static str; 12];

    /// Chromatic names spelled with flats
    const FLAT: [&'static str; 12];

    fn has_stem(stem: &str) -> bool {
        Self::STEMS.contains(&stem)
    }

    /// Chromatic index (0-11) of a normalized name in this system
    ///
    /// Accepts any stem with up to a double accidental, so `"cbb"` and
    /// `"solx"` resolve even though neither appears in the tables.
    fn chromatic_index(name: &str) -> Option<usize> {
        if let Some(i) = Self::SHARP.iter().position(|n| *n == name) {
            return Some(i);
        }
        if let Some(i) = Self::FLAT.iter().position(|n| *n == name) {
            return Some(i);
        }
        let (stem, offset) = strip_accidental(name);
        let degree = Self::STEMS.iter().position(|s| *s == stem)?;
        Some((DIATONIC_STEPS[degree] as i32 + offset).rem_euclid(12) as usize)
    }

    fn name_at(index: usize, prefer_sharps: bool) -> &'static str {
        if prefer_sharps {
            Self::SHARP[index % 12]
        } else {
            Self::FLAT[index % 12]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_tables_consistent<S: ChromaticNames>() {
        for i in 0..12 {
            assert_eq!(S::chromatic_index(S::SHARP[i]), Some(i), "{:?} sharp {}", S::KIND, i);
            assert_eq!(S::chromatic_index(S::FLAT[i]), Some(i), "{:?} flat {}", S::KIND, i);
        }
        for (degree, stem) in S::STEMS.iter().enumerate() {
            assert_eq!(S::SHARP[DIATONIC_STEPS[degree]], *stem);
            assert_eq!(S::FLAT[DIATONIC_STEPS[degree]], *stem);
        }
    }

    #[test]
    fn test_tables_are_consistent() {
        assert_tables_consistent::<WesternSystem>();
        assert_tables_consistent::<SolfegeSystem>();
        assert_tables_consistent::<SargamSystem>();
        assert_tables_consistent::<NumberSystem>();
    }

    #[test]
    fn test_double_accidentals_resolve() {
        assert_eq!(WesternSystem::chromatic_index("cbb"), Some(10));
        assert_eq!(WesternSystem::chromatic_index("bx"), Some(1));
        assert_eq!(SolfegeSystem::chromatic_index("solx"), Some(9));
        assert_eq!(SargamSystem::chromatic_index("sabb"), Some(10));
        assert_eq!(NumberSystem::chromatic_index("7#"), Some(0));
    }

    #[test]
    fn test_name_at() {
        assert_eq!(WesternSystem::name_at(6, true), "f#");
        assert_eq!(WesternSystem::name_at(6, false), "gb");
        assert_eq!(SolfegeSystem::name_at(10, false), "tib");
        assert_eq!(NumberSystem::name_at(13, true), "1#");
    }
}
