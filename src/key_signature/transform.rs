//! Pitch algebra over a key signature
//!
//! Every operation parses its pitch arguments into generic indices,
//! works in temperament steps or scale steps, and renders the result in
//! the notation of the input pitch. Octave numbers are relative, with
//! the octave boundary at n0.

use crate::errors::{MusicError, Outcome};
use crate::models::notation::ClassifiedPitch;

use super::types::{ClosestNote, InvertMode, Inverted, ScalarDistance, Transposed};
use super::KeySignature;

impl KeySignature {
    fn resolve(&self, name: &str) -> (ClassifiedPitch, Result<usize, MusicError>) {
        let pitch = self.classify_pitch(name);
        let index = self.to_generic(&pitch);
        (pitch, index)
    }

    /// Spelling preference for results derived from `pitch`
    fn preference(&self, pitch: &ClassifiedPitch) -> bool {
        pitch.accidental_preference().unwrap_or(self.prefer_sharps)
    }

    /// Nearest scale degree to `target`, named in the target's notation
    pub fn closest_note(&self, target: &str) -> Outcome<ClosestNote> {
        let (pitch, index) = self.resolve(target);
        let index = match index {
            Ok(index) => index,
            Err(e) => return Outcome::failed(ClosestNote::not_found(pitch.name), e),
        };

        let (i, distance) = self.nearest_degree(index);
        self.spell_or_generic(self.degrees[i].index, pitch.kind, self.prefer_sharps)
            .map(|name| ClosestNote {
                name,
                index: i as i32,
                distance,
            })
    }

    pub fn note_in_scale(&self, target: &str) -> bool {
        let closest = self.closest_note(target);
        closest.is_ok() && closest.value.distance == 0
    }

    /// Move a pitch by `n` temperament steps
    pub fn semitone_transform(&self, pitch: &str, n: i32) -> Outcome<Transposed> {
        let (pitch, index) = self.resolve(pitch);
        let index = match index {
            Ok(index) => index as i32,
            Err(e) => return Outcome::failed(unmoved(pitch), e),
        };

        let size = self.temperament as i32;
        if n.rem_euclid(size) == 0 {
            return Outcome::ok(Transposed {
                name: pitch.name,
                octave_delta: n.div_euclid(size),
            });
        }

        let total = index + n;
        let octave_delta = total.div_euclid(size);
        let landing = total.rem_euclid(size) as usize;
        self.spell_or_generic(landing, pitch.kind, self.preference(&pitch))
            .map(|name| Transposed { name, octave_delta })
    }

    /// Move a pitch by `n` scale steps
    ///
    /// An off-scale pitch moves from its nearest degree and keeps its
    /// offset from that degree at the landing point.
    pub fn scalar_transform(&self, pitch: &str, n: i32) -> Outcome<Transposed> {
        let (pitch, index) = self.resolve(pitch);
        let index = match index {
            Ok(index) => index as i32,
            Err(e) => return Outcome::failed(unmoved(pitch), e),
        };

        let size = self.temperament as i32;
        let mode_length = self.mode_length() as i32;
        let octave_deltas = self.scale.octave_deltas();
        let (i, distance) = self.nearest_degree(index as usize);
        let shift = (index + distance).div_euclid(size);

        let position = i as i32 + n;
        let k = position.rem_euclid(mode_length) as usize;
        let mut octave_delta =
            shift + position.div_euclid(mode_length) + octave_deltas[k] - octave_deltas[i];

        let landing = self.degrees[k].index as i32 - distance;
        octave_delta += landing.div_euclid(size);
        let landing = landing.rem_euclid(size) as usize;

        self.spell_or_generic(landing, pitch.kind, self.preference(&pitch))
            .map(|name| Transposed { name, octave_delta })
    }

    /// Temperament steps from `(b, octave_b)` up to `(a, octave_a)`
    pub fn semitone_distance(&self, a: &str, octave_a: i32, b: &str, octave_b: i32) -> Outcome<i32> {
        let size = self.temperament as i32;
        let (_, index_a) = self.resolve(a);
        let (_, index_b) = self.resolve(b);
        match (index_a, index_b) {
            (Ok(ia), Ok(ib)) => Outcome::ok((octave_a * size + ia as i32) - (octave_b * size + ib as i32)),
            (Err(e), _) | (_, Err(e)) => Outcome::failed(0, e),
        }
    }

    /// Scale-step position of a pitch and its offset from the nearest degree
    fn scalar_position(&self, index: usize, octave: i32) -> (i32, i32) {
        let size = self.temperament as i32;
        let mode_length = self.mode_length() as i32;
        let (i, distance) = self.nearest_degree(index);
        let shift = (index as i32 + distance).div_euclid(size);
        let position = i as i32 + (octave + shift - self.scale.octave_deltas()[i]) * mode_length;
        (position, distance)
    }

    /// Scale steps from `(b, octave_b)` up to `(a, octave_a)`
    pub fn scalar_distance(
        &self,
        a: &str,
        octave_a: i32,
        b: &str,
        octave_b: i32,
    ) -> Outcome<ScalarDistance> {
        let (_, index_a) = self.resolve(a);
        let (_, index_b) = self.resolve(b);
        match (index_a, index_b) {
            (Ok(ia), Ok(ib)) => {
                let (position_a, error_a) = self.scalar_position(ia, octave_a);
                let (position_b, error_b) = self.scalar_position(ib, octave_b);
                Outcome::ok(ScalarDistance {
                    steps: position_a - position_b,
                    rounding_error: error_a + error_b,
                })
            }
            (Err(e), _) | (_, Err(e)) => Outcome::failed(
                ScalarDistance {
                    steps: 0,
                    rounding_error: 0,
                },
                e,
            ),
        }
    }

    /// Reflect a pitch around an axis pitch
    ///
    /// `mode` is "even", "odd", "scalar" or an integer whose parity picks
    /// even or odd. An unrecognized mode leaves the pitch where it is.
    pub fn invert(
        &self,
        pitch: &str,
        octave: i32,
        axis: &str,
        axis_octave: i32,
        mode: &str,
    ) -> Outcome<Inverted> {
        let unchanged = || Inverted {
            name: self.classify_pitch(pitch).name,
            octave,
        };
        let mode = match mode.parse::<InvertMode>() {
            Ok(mode) => mode,
            Err(e) => return Outcome::failed(unchanged(), e),
        };

        let transposed = match mode {
            InvertMode::Even | InvertMode::Odd => {
                let distance = self.semitone_distance(pitch, octave, axis, axis_octave);
                if let Some(e) = distance.error {
                    return Outcome::failed(unchanged(), e);
                }
                let delta = match mode {
                    InvertMode::Even => 2 * distance.value,
                    _ => 2 * distance.value - 1,
                };
                self.semitone_transform(pitch, -delta)
            }
            InvertMode::Scalar => {
                let distance = self.scalar_distance(pitch, octave, axis, axis_octave);
                if let Some(e) = distance.error {
                    return Outcome::failed(unchanged(), e);
                }
                self.scalar_transform(pitch, -2 * distance.value.steps)
            }
        };

        transposed.map(|t| Inverted {
            name: t.name,
            octave: octave + t.octave_delta,
        })
    }
}

fn unmoved(pitch: ClassifiedPitch) -> Transposed {
    Transposed {
        name: pitch.name,
        octave_delta: 0,
    }
}
