//! Solfege system pitch implementation
//!
//! Syllables do, re, me, fa, sol, la, ti with chromatic inflections
//! written as accidental suffixes (`do#`, `tib`).

use super::ChromaticNames;
use crate::models::notation::NotationKind;

/// Solfege system implementation
pub struct SolfegeSystem;

impl ChromaticNames for SolfegeSystem {
    const KIND: NotationKind = NotationKind::Solfege;
    const STEMS: [&'static str; 7] = ["do", "re", "me", "fa", "sol", "la", "ti"];
    const SHARP: [&'static str; 12] = [
        "do", "do#", "re", "re#", "me", "fa", "fa#", "sol", "sol#", "la", "la#", "ti",
    ];
    const FLAT: [&'static str; 12] = [
        "do", "reb", "re", "meb", "me", "fa", "solb", "sol", "lab", "la", "tib", "ti",
    ];
}
