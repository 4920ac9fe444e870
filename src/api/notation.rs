//! Stateless pitch-name functions exported to JavaScript

use wasm_bindgen::prelude::*;

use crate::key_signature::modes::CATALOG_JSON;
use crate::models::{accidental, classify, NotationKind};

use super::helpers::serialize;
use super::types::StrippedPitch;

/// Lowercase a pitch name and rewrite accidental glyphs in ASCII
#[wasm_bindgen(js_name = normalizePitch)]
pub fn normalize_pitch(name: &str) -> String {
    accidental::normalize(name)
}

/// Render a pitch name with a capital letter and accidental glyphs
#[wasm_bindgen(js_name = displayPitch)]
pub fn display_pitch(name: &str) -> String {
    accidental::display(&accidental::normalize(name))
}

#[wasm_bindgen(js_name = classifyPitch)]
pub fn classify_pitch(name: &str) -> NotationKind {
    classify(name, &[])
}

/// Split a pitch name into `{ stem, offset }`
#[wasm_bindgen(js_name = stripAccidental)]
pub fn strip_accidental(name: &str) -> Result<JsValue, JsValue> {
    let name = accidental::normalize(name);
    let (stem, offset) = accidental::strip_accidental(&name);
    serialize(
        &StrippedPitch {
            stem: stem.to_string(),
            offset,
        },
        "stripAccidental",
    )
}

/// The compiled mode catalog: modes, maqam overrides and sharp-key list
#[wasm_bindgen(js_name = getModeCatalog)]
pub fn get_mode_catalog() -> Result<JsValue, JsValue> {
    js_sys::JSON::parse(CATALOG_JSON)
}
