//! Notation families for pitch names
//!
//! A pitch name is classified by table membership after normalization.
//! Letter names are checked first, so a syllable shared between systems
//! (`re`) resolves to the first family that claims it.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::models::accidental::{normalize, strip_accidental};
use crate::models::pitch_systems::{
    ChromaticNames, GenericSystem, NumberSystem, SargamSystem, SolfegeSystem, WesternSystem,
};

/// Enumeration of the notations a pitch name can be written in
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum NotationKind {
    /// Not recognized by any table
    Unknown = 0,

    /// Temperament index names (n0, n1, ...)
    Generic = 1,

    /// Letter names (c, c#, db, ...)
    Letter = 2,

    /// Solfege syllables (do, re, me, ...)
    Solfege = 3,

    /// East-indian solfege (sa, re, ga, ...)
    EastIndian = 4,

    /// Scalar mode numbers (1-7)
    ScalarNumber = 5,

    /// Caller-supplied names installed on a key signature
    Custom = 6,
}

impl NotationKind {
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => NotationKind::Generic,
            2 => NotationKind::Letter,
            3 => NotationKind::Solfege,
            4 => NotationKind::EastIndian,
            5 => NotationKind::ScalarNumber,
            6 => NotationKind::Custom,
            _ => NotationKind::Unknown,
        }
    }

    /// Get snake_case name for JSON serialization
    pub fn snake_case_name(&self) -> &'static str {
        match self {
            NotationKind::Unknown => "unknown",
            NotationKind::Generic => "generic",
            NotationKind::Letter => "letter",
            NotationKind::Solfege => "solfege",
            NotationKind::EastIndian => "east_indian",
            NotationKind::ScalarNumber => "scalar_number",
            NotationKind::Custom => "custom",
        }
    }
}

impl Default for NotationKind {
    fn default() -> Self {
        NotationKind::Unknown
    }
}

/// Determine the notation family of a pitch name
///
/// `custom` holds caller-installed names; an otherwise unknown name whose
/// stem (or whole text) matches one of them is classified `Custom`.
pub fn classify(name: &str, custom: &[String]) -> NotationKind {
    let name = normalize(name);
    if WesternSystem::chromatic_index(&name).is_some() {
        return NotationKind::Letter;
    }

    let (stem, _) = strip_accidental(&name);
    if GenericSystem::parse_stem(stem).is_some() {
        NotationKind::Generic
    } else if SolfegeSystem::has_stem(stem) {
        NotationKind::Solfege
    } else if SargamSystem::has_stem(stem) {
        NotationKind::EastIndian
    } else if NumberSystem::has_stem(stem) {
        NotationKind::ScalarNumber
    } else if custom.iter().any(|c| *c == name || c == stem) {
        NotationKind::Custom
    } else {
        NotationKind::Unknown
    }
}

/// A pitch name with its notation already resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedPitch {
    pub name: String,
    pub kind: NotationKind,
}

impl ClassifiedPitch {
    pub fn new(name: &str, custom: &[String]) -> Self {
        let name = normalize(name);
        let kind = classify(&name, custom);
        Self { name, kind }
    }

    /// Spelling preference implied by the written accidental, if any
    pub fn accidental_preference(&self) -> Option<bool> {
        if self.kind == NotationKind::Generic {
            return None;
        }
        match strip_accidental(&self.name).1 {
            o if o > 0 => Some(true),
            o if o < 0 => Some(false),
            _ => None,
        }
    }
}
