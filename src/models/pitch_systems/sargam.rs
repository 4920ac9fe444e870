//! Sargam system pitch implementation
//!
//! The sargam system uses syllables Sa, Re, Ga, Ma, Pa, Dha, Ni
//! to represent the seven degrees of the Indian musical scale.
//! Komal and tivra inflections are written as `b`/`#` suffixes.

use super::ChromaticNames;
use crate::models::notation::NotationKind;

/// Sargam (east-indian solfege) system implementation
pub struct SargamSystem;

impl ChromaticNames for SargamSystem {
    const KIND: NotationKind = NotationKind::EastIndian;
    const STEMS: [&'static str; 7] = ["sa", "re", "ga", "ma", "pa", "dha", "ni"];
    const SHARP: [&'static str; 12] = [
        "sa", "sa#", "re", "re#", "ga", "ma", "ma#", "pa", "pa#", "dha", "dha#", "ni",
    ];
    const FLAT: [&'static str; 12] = [
        "sa", "reb", "re", "gab", "ga", "ma", "pab", "pa", "dhab", "dha", "nib", "ni",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_komal_and_tivra() {
        assert_eq!(SargamSystem::chromatic_index("dhab"), Some(8));
        assert_eq!(SargamSystem::chromatic_index("ma#"), Some(6));
        assert_eq!(SargamSystem::name_at(3, false), "gab");
        assert!(SargamSystem::has_stem("ni"));
        assert!(!SargamSystem::has_stem("do"));
    }
}
