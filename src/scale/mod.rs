//! Scale construction over equal temperaments
//!
//! A scale is built by walking an interval pattern from a starting index
//! through the generic note space `n0..n{N-1}`. The walk records one
//! octave delta per degree so callers can tell which degrees sit above
//! the temperament boundary (n0) relative to the root.

use serde::Serialize;

use crate::errors::{MusicError, Outcome};
use crate::models::GenericSystem;

/// Temperament used when none (or zero divisions) is given
pub const DEFAULT_TEMPERAMENT: usize = 12;

/// 12-division index -> (sharp, flat) index in the 21-division temperament
pub const TWELVE_TO_TWENTY_ONE: [(usize, usize); 12] = [
    (0, 0),   // c
    (1, 2),   // c#, db
    (3, 3),   // d
    (4, 5),   // d#, eb
    (6, 6),   // e
    (9, 9),   // f
    (10, 11), // f#, gb
    (12, 12), // g
    (13, 14), // g#, ab
    (15, 15), // a
    (16, 17), // a#, bb
    (18, 18), // b
];

/// One octave of a scale in generic note indices
///
/// `degrees` holds `mode length + 1` entries; the last closes the octave
/// and repeats the root's index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scale {
    temperament: usize,
    degrees: Vec<usize>,
    octave_deltas: Vec<i32>,
}

impl Scale {
    /// Build a scale from an interval pattern
    ///
    /// An empty pattern means uniform single steps across the whole
    /// temperament. A 12-division pattern requested in the 21-division
    /// temperament is walked in 12 and then remapped, choosing the sharp
    /// or flat column of `TWELVE_TO_TWENTY_ONE`.
    pub fn build(intervals: &[u32], start: usize, temperament: usize, prefer_sharps: bool) -> Scale {
        let temperament = if temperament == 0 {
            log::warn!("Temperament of zero divisions, using {}", DEFAULT_TEMPERAMENT);
            DEFAULT_TEMPERAMENT
        } else {
            temperament
        };

        let uniform;
        let steps = if intervals.is_empty() {
            uniform = vec![1; temperament];
            uniform.as_slice()
        } else {
            intervals
        };

        let span: u32 = steps.iter().sum();
        if temperament == 21 && span == 12 {
            return Self::walk(steps, start, 12).remapped(prefer_sharps);
        }
        Self::walk(steps, start, temperament)
    }

    fn walk(steps: &[u32], start: usize, temperament: usize) -> Scale {
        let mut index = start % temperament;
        let mut octave = 0;
        let mut degrees = Vec::with_capacity(steps.len() + 1);
        let mut octave_deltas = Vec::with_capacity(steps.len() + 1);
        degrees.push(index);
        octave_deltas.push(octave);

        for step in steps {
            index += *step as usize;
            while index >= temperament {
                octave += 1;
                index -= temperament;
            }
            degrees.push(index);
            octave_deltas.push(octave);
        }

        Scale {
            temperament,
            degrees,
            octave_deltas,
        }
    }

    fn remapped(&self, prefer_sharps: bool) -> Scale {
        let degrees = self
            .degrees
            .iter()
            .map(|&i| {
                let (sharp, flat) = TWELVE_TO_TWENTY_ONE[i % 12];
                if prefer_sharps {
                    sharp
                } else {
                    flat
                }
            })
            .collect();
        Scale {
            temperament: 21,
            degrees,
            octave_deltas: self.octave_deltas.clone(),
        }
    }

    /// Carry a 12-division scale into the 21-division temperament
    pub fn remap_twelve_to_twenty_one(&self, prefer_sharps: bool) -> Result<Scale, MusicError> {
        if self.temperament != 12 {
            return Err(MusicError::FormatMismatch(format!(
                "cannot remap a {}-division scale to 21",
                self.temperament
            )));
        }
        Ok(self.remapped(prefer_sharps))
    }

    pub fn temperament(&self) -> usize {
        self.temperament
    }

    /// Generic indices of every degree, closing root included
    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    pub fn octave_deltas(&self) -> &[i32] {
        &self.octave_deltas
    }

    /// Number of distinct degrees (the closing root is not counted)
    pub fn mode_length(&self) -> usize {
        self.degrees.len().saturating_sub(1)
    }

    pub fn generic_names(&self) -> Vec<String> {
        self.degrees.iter().map(|&i| GenericSystem::name(i)).collect()
    }

    /// Every generic name of the temperament
    pub fn note_names(&self) -> Vec<String> {
        GenericSystem::note_names(self.temperament)
    }

    /// Re-label each degree through an alphabet indexed by generic index
    ///
    /// A mismatched alphabet leaves the generic names in place and
    /// reports `FormatMismatch`.
    pub fn express<S: AsRef<str>>(&self, alphabet: &[S]) -> Outcome<Vec<String>> {
        if alphabet.len() != self.temperament {
            return Outcome::failed(
                self.generic_names(),
                MusicError::FormatMismatch(format!(
                    "alphabet of {} names for a {}-division temperament",
                    alphabet.len(),
                    self.temperament
                )),
            );
        }
        Outcome::ok(
            self.degrees
                .iter()
                .map(|&i| alphabet[i].as_ref().to_string())
                .collect(),
        )
    }

    /// Degree names (generic when no alphabet is given) with octave deltas
    pub fn scale_and_octave_deltas<S: AsRef<str>>(
        &self,
        alphabet: Option<&[S]>,
    ) -> Outcome<(Vec<String>, Vec<i32>)> {
        let deltas = self.octave_deltas.clone();
        match alphabet {
            None => Outcome::ok((self.generic_names(), deltas)),
            Some(alphabet) => self.express(alphabet).map(|names| (names, deltas)),
        }
    }
}
