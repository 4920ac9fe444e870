//! Key signatures: a mode realized on a key within a temperament
//!
//! Construction resolves the mode through the compiled catalog, resolves
//! the key to a generic index, walks the scale and then spells every
//! degree in each notation the temperament supports. All pitch algebra
//! (see `transform`) runs on generic indices and renders results back in
//! the caller's notation.

mod conversion;
pub mod modes;
pub mod spelling;
mod transform;
pub mod types;

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::errors::MusicError;
use crate::models::accidental::normalize;
use crate::models::enharmonics::{flat_index, sharp_index, twenty_one_index};
use crate::models::notation::{classify, NotationKind};
use crate::models::pitch_systems::western::{ALL_NOTES, CHROMATIC_FLAT, CHROMATIC_SHARP};
use crate::models::pitch_systems::{
    ChromaticNames, GenericSystem, NumberSystem, SargamSystem, SolfegeSystem,
};
use crate::scale::{Scale, DEFAULT_TEMPERAMENT};

pub use types::{ClosestNote, InvertMode, Inverted, ScalarDistance, Transposed};

/// Every spelling of one scale degree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeNames {
    /// Generic index of the degree
    pub index: usize,
    pub generic: String,
    pub letter: Option<String>,
    pub solfege: Option<String>,
    pub east_indian: Option<String>,
    pub scalar: Option<String>,
    pub custom: Option<String>,
}

impl DegreeNames {
    /// The degree's name in a notation, if the key signature has one
    pub fn get(&self, kind: NotationKind) -> Option<&str> {
        match kind {
            NotationKind::Generic => Some(&self.generic),
            NotationKind::Letter => self.letter.as_deref(),
            NotationKind::Solfege => self.solfege.as_deref(),
            NotationKind::EastIndian => self.east_indian.as_deref(),
            NotationKind::ScalarNumber => self.scalar.as_deref(),
            NotationKind::Custom => self.custom.as_deref(),
            NotationKind::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct KeySignature {
    mode: String,
    key: String,
    temperament: usize,
    intervals: Vec<u32>,
    prefer_sharps: bool,
    key_index: usize,
    scale: Scale,
    degrees: Vec<DegreeNames>,
    fixed_solfege: bool,
    #[serde(skip)]
    warnings: Vec<MusicError>,
}

impl KeySignature {
    /// Realize a catalog mode on a key
    ///
    /// Never fails: an unknown mode or key degrades to a chromatic scale
    /// or index 0, and the condition is kept in `warnings()`.
    pub fn new(mode: &str, key: &str, temperament: usize) -> KeySignature {
        let mut warnings = Vec::new();
        let temperament = checked_temperament(temperament, &mut warnings);

        let mut mode = mode.trim().to_lowercase();
        let mut key = normalize(key);
        if let Some(fixed_key) = modes::maqam_key(&mode) {
            key = fixed_key.to_string();
            mode = modes::MAQAM_MODE.to_string();
        }

        let intervals = catalog_intervals(&mode, temperament, &mut warnings);
        Self::assemble(mode, key, temperament, intervals, warnings)
    }

    /// Realize an explicit interval pattern on a key; the mode is named
    /// "custom"
    pub fn with_intervals(intervals: &[u32], key: &str, temperament: usize) -> KeySignature {
        let mut warnings = Vec::new();
        let temperament = checked_temperament(temperament, &mut warnings);

        let intervals = if intervals.contains(&0) {
            push_warning(
                &mut warnings,
                MusicError::FormatMismatch(format!("zero-semitone step in {:?}", intervals)),
            );
            Vec::new()
        } else {
            fitted_pattern(modes::CUSTOM_MODE, intervals, temperament, &mut warnings)
        };
        Self::assemble(
            modes::CUSTOM_MODE.to_string(),
            normalize(key),
            temperament,
            intervals,
            warnings,
        )
    }

    fn assemble(
        mode: String,
        key: String,
        temperament: usize,
        intervals: Vec<u32>,
        mut warnings: Vec<MusicError>,
    ) -> KeySignature {
        let prefer_sharps = modes::prefers_sharps(&key, &mode) || key.contains('#');
        let span: u32 = intervals.iter().sum();
        let twelve_space = temperament == 12 || (temperament == 21 && span == 12);
        let key_index = resolve_key_index(&key, temperament, twelve_space, prefer_sharps)
            .unwrap_or_else(|e| {
                push_warning(&mut warnings, e);
                0
            });

        let scale = Scale::build(&intervals, key_index, temperament, prefer_sharps);
        let letters = spell_letters(&scale, &key, prefer_sharps);
        let syllables = |stems: &[&str; 7]| {
            letters
                .as_ref()
                .filter(|_| temperament == 12)
                .map(|l| spelling::mode_map_list(l, stems))
        };
        let solfege = syllables(&SolfegeSystem::STEMS);
        let east_indian = syllables(&SargamSystem::STEMS);
        let scalar = syllables(&NumberSystem::STEMS);

        let pick = |table: &Option<Vec<String>>, i: usize| table.as_ref().map(|t| t[i].clone());
        let degrees = scale
            .degrees()
            .iter()
            .enumerate()
            .map(|(i, &index)| DegreeNames {
                index,
                generic: GenericSystem::name(index),
                letter: pick(&letters, i),
                solfege: pick(&solfege, i),
                east_indian: pick(&east_indian, i),
                scalar: pick(&scalar, i),
                custom: None,
            })
            .collect();

        log::debug!(
            "KeySignature {} {} in {}-TET: {:?}",
            key,
            mode,
            temperament,
            scale.degrees()
        );

        KeySignature {
            mode,
            key,
            temperament,
            intervals,
            prefer_sharps,
            key_index,
            scale,
            degrees,
            fixed_solfege: true,
            warnings,
        }
    }

    /// Degree names in the richest notation available: letters where
    /// the temperament has them, generic names otherwise
    pub fn scale(&self) -> Vec<String> {
        self.notes_in(NotationKind::Letter)
            .unwrap_or_else(|| self.generic_scale())
    }

    /// `scale()` with the octave delta of every degree
    pub fn scale_and_octave_deltas(&self) -> (Vec<String>, Vec<i32>) {
        (self.scale(), self.scale.octave_deltas().to_vec())
    }

    pub fn generic_scale(&self) -> Vec<String> {
        self.scale.generic_names()
    }

    /// Every degree (closing root included) spelled in one notation
    pub fn notes_in(&self, kind: NotationKind) -> Option<Vec<String>> {
        self.degrees
            .iter()
            .map(|d| d.get(kind).map(str::to_string))
            .collect()
    }

    pub fn degrees(&self) -> &[DegreeNames] {
        &self.degrees
    }

    pub fn scale_model(&self) -> &Scale {
        &self.scale
    }

    pub fn mode_length(&self) -> usize {
        self.scale.mode_length()
    }

    pub fn number_of_semitones(&self) -> usize {
        self.temperament
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn intervals(&self) -> &[u32] {
        &self.intervals
    }

    pub fn key_index(&self) -> usize {
        self.key_index
    }

    pub fn prefer_sharps(&self) -> bool {
        self.prefer_sharps
    }

    pub fn fixed_solfege(&self) -> bool {
        self.fixed_solfege
    }

    /// Fixed solfege (the default) names absolute pitches (do = c);
    /// movable solfege names scale degrees (do = root)
    pub fn set_fixed_solfege(&mut self, fixed: bool) {
        self.fixed_solfege = fixed;
    }

    /// Conditions that degraded construction
    pub fn warnings(&self) -> &[MusicError] {
        &self.warnings
    }

    /// Installed custom names, one per degree (closing root excluded)
    pub fn custom_note_names(&self) -> Option<Vec<String>> {
        self.degrees[..self.mode_length()]
            .iter()
            .map(|d| d.custom.clone())
            .collect()
    }

    /// Install one custom name per degree
    ///
    /// Names must be distinct and exactly `mode_length()` of them are
    /// required; on error the previous names stay in place.
    pub fn set_custom_note_names<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), MusicError> {
        let mode_length = self.mode_length();
        if names.len() != mode_length {
            return Err(MusicError::CustomNameArityError {
                expected: mode_length,
                actual: names.len(),
            });
        }

        let names: Vec<String> = names.iter().map(|n| normalize(n.as_ref())).collect();
        let mut seen = HashSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(MusicError::DuplicateCustomName(name.clone()));
            }
        }

        for (i, degree) in self.degrees.iter_mut().enumerate() {
            degree.custom = Some(names[i % mode_length].clone());
        }
        Ok(())
    }

    /// Scale degree at any (possibly negative) modal index, with the
    /// octaves crossed relative to the root
    pub fn modal_pitch_to_letter(&self, modal_index: i32) -> Transposed {
        let mode_length = self.mode_length() as i32;
        let k = modal_index.rem_euclid(mode_length) as usize;
        let octave_delta = modal_index.div_euclid(mode_length) + self.scale.octave_deltas()[k];
        let name = self.degrees[k]
            .letter
            .clone()
            .unwrap_or_else(|| self.degrees[k].generic.clone());
        Transposed { name, octave_delta }
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.mode)
    }
}

fn push_warning(warnings: &mut Vec<MusicError>, error: MusicError) {
    log::warn!("{}", error);
    warnings.push(error);
}

fn checked_temperament(temperament: usize, warnings: &mut Vec<MusicError>) -> usize {
    if temperament == 0 {
        push_warning(
            warnings,
            MusicError::FormatMismatch(format!(
                "temperament of zero divisions, using {}",
                DEFAULT_TEMPERAMENT
            )),
        );
        DEFAULT_TEMPERAMENT
    } else {
        temperament
    }
}

/// Interval pattern for a catalog mode; an empty pattern is chromatic
fn catalog_intervals(mode: &str, temperament: usize, warnings: &mut Vec<MusicError>) -> Vec<u32> {
    if mode == modes::CHROMATIC_MODE {
        return Vec::new();
    }
    let Some(pattern) = modes::intervals(mode) else {
        push_warning(warnings, MusicError::InvalidModeOverride(mode.to_string()));
        return Vec::new();
    };

    fitted_pattern(mode, pattern, temperament, warnings)
}

/// A pattern that closes the octave of the temperament (or a 12-step
/// pattern carried into 21); anything else falls back to chromatic
fn fitted_pattern(
    mode: &str,
    pattern: &[u32],
    temperament: usize,
    warnings: &mut Vec<MusicError>,
) -> Vec<u32> {
    let span = pattern.iter().sum::<u32>() as usize;
    if span == temperament || (temperament == 21 && span == 12) {
        pattern.to_vec()
    } else {
        push_warning(
            warnings,
            MusicError::FormatMismatch(format!(
                "mode '{}' spans {} steps, temperament has {}",
                mode, span, temperament
            )),
        );
        Vec::new()
    }
}

/// Generic index of the key, in 12-space when the scale is walked there
fn resolve_key_index(
    key: &str,
    temperament: usize,
    twelve_space: bool,
    prefer_sharps: bool,
) -> Result<usize, MusicError> {
    let unresolved = || MusicError::NotationError(format!("key '{}'", key));

    if !twelve_space {
        return GenericSystem::index_of(key, temperament)
            .or_else(|| (temperament == 21).then(|| twenty_one_index(key)).flatten())
            .ok_or_else(unresolved);
    }

    match classify(key, &[]) {
        NotationKind::Letter if prefer_sharps => sharp_index(key),
        NotationKind::Letter => flat_index(key),
        NotationKind::Generic => GenericSystem::index_of(key, 12).ok_or_else(unresolved),
        NotationKind::Solfege => SolfegeSystem::chromatic_index(key).ok_or_else(unresolved),
        NotationKind::EastIndian => SargamSystem::chromatic_index(key).ok_or_else(unresolved),
        NotationKind::ScalarNumber => NumberSystem::chromatic_index(key).ok_or_else(unresolved),
        NotationKind::Custom | NotationKind::Unknown => Err(unresolved()),
    }
}

/// Letter spelling of every degree, where the temperament has letters
fn spell_letters(scale: &Scale, key: &str, prefer_sharps: bool) -> Option<Vec<String>> {
    match scale.temperament() {
        12 => {
            let alphabet = if prefer_sharps {
                CHROMATIC_SHARP
            } else {
                CHROMATIC_FLAT
            };
            let mut letters = scale.express(&alphabet).value;
            if classify(key, &[]) == NotationKind::Letter {
                let closing = letters.len() - 1;
                letters[0] = key.to_string();
                letters[closing] = key.to_string();
            }
            spelling::normalize_scale(&mut letters, key, prefer_sharps);
            Some(letters)
        }
        21 => Some(scale.express(&ALL_NOTES).value),
        _ => None,
    }
}
