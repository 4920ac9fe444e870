//! `KeySignature` class exported to JavaScript
//!
//! Thin wrapper over `crate::key_signature::KeySignature`. Algebra results
//! cross the boundary as `{ value, status, error }` objects; plain lists
//! cross as arrays of strings.

use wasm_bindgen::prelude::*;

use crate::errors::MusicError;
use crate::key_signature::KeySignature;
use crate::models::NotationKind;
use crate::scale::DEFAULT_TEMPERAMENT;
use crate::{wasm_info, wasm_warn};

use super::helpers::{serialize, serialize_outcome, string_array, strings_from_array};

#[wasm_bindgen(js_name = KeySignature)]
pub struct KeySignatureHandle {
    inner: KeySignature,
}

fn temperament_or_default(temperament: Option<u32>) -> usize {
    temperament.map_or(DEFAULT_TEMPERAMENT, |t| t as usize)
}

impl KeySignatureHandle {
    fn wrap(inner: KeySignature) -> Self {
        for warning in inner.warnings() {
            wasm_warn!("KeySignature({}): {}", inner, warning);
        }
        wasm_info!(
            "KeySignature created: {} ({} degrees, {}-TET)",
            inner,
            inner.mode_length(),
            inner.number_of_semitones()
        );
        Self { inner }
    }

    pub fn inner(&self) -> &KeySignature {
        &self.inner
    }
}

#[wasm_bindgen(js_class = KeySignature)]
impl KeySignatureHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(mode: &str, key: &str, temperament: Option<u32>) -> KeySignatureHandle {
        Self::wrap(KeySignature::new(mode, key, temperament_or_default(temperament)))
    }

    /// Build from an explicit interval pattern
    #[wasm_bindgen(js_name = fromIntervals)]
    pub fn from_intervals(intervals: Vec<u32>, key: &str, temperament: Option<u32>) -> KeySignatureHandle {
        Self::wrap(KeySignature::with_intervals(
            &intervals,
            key,
            temperament_or_default(temperament),
        ))
    }

    #[wasm_bindgen(js_name = getScale)]
    pub fn get_scale(&self) -> js_sys::Array {
        string_array(&self.inner.scale())
    }

    #[wasm_bindgen(js_name = getGenericScale)]
    pub fn get_generic_scale(&self) -> js_sys::Array {
        string_array(&self.inner.generic_scale())
    }

    /// Degree names in one notation, or `undefined` if the key has none
    #[wasm_bindgen(js_name = getNotesIn)]
    pub fn get_notes_in(&self, kind: NotationKind) -> Option<js_sys::Array> {
        self.inner.notes_in(kind).map(|names| string_array(&names))
    }

    /// Scale names together with their octave deltas
    #[wasm_bindgen(js_name = getScaleAndOctaveDeltas)]
    pub fn get_scale_and_octave_deltas(&self) -> Result<JsValue, JsValue> {
        serialize(&self.inner.scale_and_octave_deltas(), "getScaleAndOctaveDeltas")
    }

    #[wasm_bindgen(js_name = getModeLength)]
    pub fn get_mode_length(&self) -> u32 {
        self.inner.mode_length() as u32
    }

    #[wasm_bindgen(js_name = getNumberOfSemitones)]
    pub fn get_number_of_semitones(&self) -> u32 {
        self.inner.number_of_semitones() as u32
    }

    #[wasm_bindgen(js_name = getKey)]
    pub fn get_key(&self) -> String {
        self.inner.key().to_string()
    }

    #[wasm_bindgen(js_name = getMode)]
    pub fn get_mode(&self) -> String {
        self.inner.mode().to_string()
    }

    #[wasm_bindgen(js_name = getWarnings)]
    pub fn get_warnings(&self) -> js_sys::Array {
        let messages: Vec<String> = self.inner.warnings().iter().map(|w| w.to_string()).collect();
        string_array(&messages)
    }

    #[wasm_bindgen(js_name = noteInScale)]
    pub fn note_in_scale(&self, pitch: &str) -> bool {
        self.inner.note_in_scale(pitch)
    }

    #[wasm_bindgen(js_name = closestNote)]
    pub fn closest_note(&self, target: &str) -> Result<JsValue, JsValue> {
        serialize_outcome(self.inner.closest_note(target), "closestNote")
    }

    #[wasm_bindgen(js_name = semitoneTransform)]
    pub fn semitone_transform(&self, pitch: &str, steps: i32) -> Result<JsValue, JsValue> {
        serialize_outcome(self.inner.semitone_transform(pitch, steps), "semitoneTransform")
    }

    #[wasm_bindgen(js_name = scalarTransform)]
    pub fn scalar_transform(&self, pitch: &str, steps: i32) -> Result<JsValue, JsValue> {
        serialize_outcome(self.inner.scalar_transform(pitch, steps), "scalarTransform")
    }

    #[wasm_bindgen(js_name = semitoneDistance)]
    pub fn semitone_distance(&self, a: &str, octave_a: i32, b: &str, octave_b: i32) -> Result<JsValue, JsValue> {
        serialize_outcome(
            self.inner.semitone_distance(a, octave_a, b, octave_b),
            "semitoneDistance",
        )
    }

    #[wasm_bindgen(js_name = scalarDistance)]
    pub fn scalar_distance(&self, a: &str, octave_a: i32, b: &str, octave_b: i32) -> Result<JsValue, JsValue> {
        serialize_outcome(
            self.inner.scalar_distance(a, octave_a, b, octave_b),
            "scalarDistance",
        )
    }

    /// Reflect a pitch around an axis; `mode` is "even", "odd", "scalar"
    /// or an integer
    pub fn invert(
        &self,
        pitch: &str,
        octave: i32,
        axis: &str,
        axis_octave: i32,
        mode: &str,
    ) -> Result<JsValue, JsValue> {
        serialize_outcome(
            self.inner.invert(pitch, octave, axis, axis_octave, mode),
            "invert",
        )
    }

    /// Re-spell a pitch in another notation
    pub fn convert(&self, pitch: &str, kind: NotationKind) -> Result<JsValue, JsValue> {
        serialize_outcome(self.inner.convert(pitch, kind), "convert")
    }

    #[wasm_bindgen(js_name = genericNoteNameConvertToType)]
    pub fn generic_note_name_convert_to_type(
        &self,
        generic: &str,
        kind: NotationKind,
        prefer_sharps: bool,
    ) -> Result<JsValue, JsValue> {
        serialize_outcome(
            self.inner.convert_generic(generic, kind, prefer_sharps),
            "genericNoteNameConvertToType",
        )
    }

    #[wasm_bindgen(js_name = modalPitchToLetter)]
    pub fn modal_pitch_to_letter(&self, modal_index: i32) -> Result<JsValue, JsValue> {
        serialize(&self.inner.modal_pitch_to_letter(modal_index), "modalPitchToLetter")
    }

    /// Install custom names; returns 0 or a negative error code
    #[wasm_bindgen(js_name = setCustomNoteNames)]
    pub fn set_custom_note_names(&mut self, names: js_sys::Array) -> i32 {
        let names = match strings_from_array(&names, "setCustomNoteNames") {
            Ok(names) => names,
            Err(msg) => {
                wasm_warn!("{}", msg);
                return MusicError::NotationError(msg).code();
            }
        };
        match self.inner.set_custom_note_names(&names) {
            Ok(()) => 0,
            Err(e) => {
                wasm_warn!("setCustomNoteNames: {}", e);
                e.code()
            }
        }
    }

    #[wasm_bindgen(js_name = getCustomNoteNames)]
    pub fn get_custom_note_names(&self) -> Option<js_sys::Array> {
        self.inner.custom_note_names().map(|names| string_array(&names))
    }

    #[wasm_bindgen(js_name = setFixedSolfege)]
    pub fn set_fixed_solfege(&mut self, fixed: bool) {
        self.inner.set_fixed_solfege(fixed);
    }

    #[wasm_bindgen(js_name = getFixedSolfege)]
    pub fn get_fixed_solfege(&self) -> bool {
        self.inner.fixed_solfege()
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.to_string()
    }
}
