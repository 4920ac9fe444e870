//! Moving pitch names in and out of generic index space

use crate::errors::{MusicError, Outcome};
use crate::models::accidental::{normalize, strip_accidental, Accidental};
use crate::models::enharmonics::twenty_one_index;
use crate::models::notation::{ClassifiedPitch, NotationKind};
use crate::models::pitch_systems::western::ALL_NOTES;
use crate::models::pitch_systems::{
    ChromaticNames, GenericSystem, NumberSystem, SargamSystem, SolfegeSystem, WesternSystem,
};

use super::KeySignature;

impl KeySignature {
    /// Normalize and classify a pitch name against this key's custom names
    pub(crate) fn classify_pitch(&self, name: &str) -> ClassifiedPitch {
        let custom = self.custom_note_names().unwrap_or_default();
        ClassifiedPitch::new(name, &custom)
    }

    /// Generic index of a classified pitch
    pub(crate) fn to_generic(&self, pitch: &ClassifiedPitch) -> Result<usize, MusicError> {
        let n = self.temperament;
        let index = match pitch.kind {
            NotationKind::Generic => GenericSystem::index_of(&pitch.name, n),
            NotationKind::Letter => match n {
                12 => WesternSystem::chromatic_index(&pitch.name),
                21 => twenty_one_index(&pitch.name),
                _ => None,
            },
            NotationKind::Solfege => self.syllable_to_generic::<SolfegeSystem>(pitch),
            NotationKind::EastIndian => self.syllable_to_generic::<SargamSystem>(pitch),
            NotationKind::ScalarNumber => self.syllable_to_generic::<NumberSystem>(pitch),
            NotationKind::Custom => self.degree_lookup(pitch),
            NotationKind::Unknown => None,
        };
        index.ok_or_else(|| {
            MusicError::NotationError(format!("{} in {}-division temperament", pitch.name, n))
        })
    }

    fn syllable_to_generic<S: ChromaticNames>(&self, pitch: &ClassifiedPitch) -> Option<usize> {
        if self.temperament != 12 {
            return None;
        }
        let absolute = S::chromatic_index(&pitch.name)?;
        if self.fixed_solfege {
            return Some(absolute);
        }
        self.degree_lookup(pitch)
            .or(Some((self.key_index + absolute) % 12))
    }

    /// Match a name against the degree spellings of its notation,
    /// allowing an accidental on top of a degree name
    fn degree_lookup(&self, pitch: &ClassifiedPitch) -> Option<usize> {
        let n = self.temperament as i32;
        let exact = self
            .degrees
            .iter()
            .find(|d| d.get(pitch.kind) == Some(pitch.name.as_str()));
        if let Some(degree) = exact {
            return Some(degree.index);
        }

        let (stem, offset) = strip_accidental(&pitch.name);
        self.degrees
            .iter()
            .find(|d| d.get(pitch.kind) == Some(stem))
            .map(|d| (d.index as i32 + offset).rem_euclid(n) as usize)
    }

    /// Nearest scale degree to a generic index
    ///
    /// Returns the degree position (closing root excluded) and the signed
    /// distance `degree - target`. Exact matches win outright; otherwise
    /// each degree is tried directly and one octave up, the smallest
    /// distance winning and the earliest degree on ties.
    pub(crate) fn nearest_degree(&self, target: usize) -> (usize, i32) {
        let n = self.temperament as i32;
        let target = target as i32;
        let degrees = &self.scale.degrees()[..self.mode_length()];

        if let Some(i) = degrees.iter().position(|&d| d as i32 == target) {
            return (i, 0);
        }

        let mut best = (0, i32::MAX);
        let mut consider = |i: usize, distance: i32| {
            if distance.abs() < best.1.abs() {
                best = (i, distance);
            }
        };
        for (i, &d) in degrees.iter().enumerate() {
            let d = d as i32;
            consider(i, d - target);
            consider(i, d + n - target);
        }
        best
    }

    /// Degree position holding a generic index, if any
    fn degree_at(&self, index: usize) -> Option<usize> {
        self.scale.degrees()[..self.mode_length()]
            .iter()
            .position(|&d| d == index)
    }

    /// Name of scale degree `i` in a notation
    pub(crate) fn degree_name(&self, i: usize, kind: NotationKind, prefer_sharps: bool) -> Option<String> {
        let index = self.degrees[i].index;
        if self.fixed_solfege {
            if let Some(name) = self.absolute_syllable(index, kind, prefer_sharps) {
                return Some(name);
            }
        }
        self.degrees[i].get(kind).map(str::to_string)
    }

    fn absolute_syllable(&self, index: usize, kind: NotationKind, prefer_sharps: bool) -> Option<String> {
        if self.temperament != 12 {
            return None;
        }
        let name = match kind {
            NotationKind::Solfege => SolfegeSystem::name_at(index, prefer_sharps),
            NotationKind::EastIndian => SargamSystem::name_at(index, prefer_sharps),
            NotationKind::ScalarNumber => NumberSystem::name_at(index, prefer_sharps),
            _ => return None,
        };
        Some(name.to_string())
    }

    /// Render a generic index in a notation
    ///
    /// Scale degrees take their realized spelling. Off-scale letters come
    /// from the sharp or flat alphabet; off-scale syllables and custom
    /// names inflect the nearest degree with an accidental. `None` when
    /// the notation has no names in this temperament.
    pub(crate) fn spell(&self, index: usize, kind: NotationKind, prefer_sharps: bool) -> Option<String> {
        if kind == NotationKind::Generic {
            return Some(GenericSystem::name(index));
        }
        if let Some(i) = self.degree_at(index) {
            if let Some(name) = self.degree_name(i, kind, prefer_sharps) {
                return Some(name);
            }
        }

        match kind {
            NotationKind::Letter => match self.temperament {
                12 => Some(WesternSystem::name_at(index, prefer_sharps).to_string()),
                21 => ALL_NOTES.get(index).map(|s| s.to_string()),
                _ => None,
            },
            NotationKind::Solfege | NotationKind::EastIndian | NotationKind::ScalarNumber => {
                if self.fixed_solfege {
                    return self.absolute_syllable(index, kind, prefer_sharps);
                }
                self.inflect_nearest(index, kind).or_else(|| {
                    let relative = (index + 12 - self.key_index % 12) % 12;
                    self.absolute_syllable(relative, kind, prefer_sharps)
                })
            }
            NotationKind::Custom => self.inflect_nearest(index, kind),
            NotationKind::Generic | NotationKind::Unknown => None,
        }
    }

    fn inflect_nearest(&self, index: usize, kind: NotationKind) -> Option<String> {
        let (i, distance) = self.nearest_degree(index);
        let name = self.degrees[i].get(kind)?;
        let (stem, offset) = strip_accidental(name);
        let accidental = Accidental::from_offset(offset - distance)?;
        Some(format!("{}{}", stem, accidental.ascii()))
    }

    /// Spell an index, falling back to its generic name
    pub(crate) fn spell_or_generic(&self, index: usize, kind: NotationKind, prefer_sharps: bool) -> Outcome<String> {
        match self.spell(index, kind, prefer_sharps) {
            Some(name) => Outcome::ok(name),
            None => Outcome::failed(
                GenericSystem::name(index),
                MusicError::FormatMismatch(format!(
                    "no {} names in {}-division temperament",
                    kind.snake_case_name(),
                    self.temperament
                )),
            ),
        }
    }

    /// Generic name of any pitch this key signature understands
    pub fn generic_name(&self, pitch: &str) -> Outcome<String> {
        let pitch = self.classify_pitch(pitch);
        match self.to_generic(&pitch) {
            Ok(index) => Outcome::ok(GenericSystem::name(index)),
            Err(e) => Outcome::failed(pitch.name, e),
        }
    }

    /// Render a generic note name in another notation
    pub fn convert_generic(&self, generic: &str, kind: NotationKind, prefer_sharps: bool) -> Outcome<String> {
        let name = normalize(generic);
        match GenericSystem::index_of(&name, self.temperament) {
            Some(index) => self.spell_or_generic(index, kind, prefer_sharps),
            None => Outcome::failed(name.clone(), MusicError::NotationError(name)),
        }
    }

    /// Re-spell a pitch in another notation
    pub fn convert(&self, pitch: &str, kind: NotationKind) -> Outcome<String> {
        let pitch = self.classify_pitch(pitch);
        let prefer_sharps = pitch.accidental_preference().unwrap_or(self.prefer_sharps);
        match self.to_generic(&pitch) {
            Ok(index) => self.spell_or_generic(index, kind, prefer_sharps),
            Err(e) => Outcome::failed(pitch.name, e),
        }
    }
}
