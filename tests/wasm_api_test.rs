//! WASM API test
//!
//! Exercises the JavaScript-facing `KeySignature` class and the free
//! pitch functions. Only built for wasm32 targets.

#![cfg(target_arch = "wasm32")]

use musicutils_wasm::api::{classify_pitch, display_pitch, get_mode_catalog, normalize_pitch, KeySignatureHandle};
use musicutils_wasm::NotationKind;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn field(value: &JsValue, name: &str) -> JsValue {
    js_sys::Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn test_key_signature_class() {
    let ks = KeySignatureHandle::new("major", "g", None);
    assert_eq!(ks.get_mode_length(), 7);
    assert_eq!(ks.get_number_of_semitones(), 12);
    assert_eq!(ks.get_scale().get(6).as_string().as_deref(), Some("f#"));
    assert!(ks.note_in_scale("f#"));
    assert_eq!(ks.to_js_string(), "g major");
}

#[wasm_bindgen_test]
fn test_status_reports() {
    let ks = KeySignatureHandle::new("major", "c", Some(12));

    let closest = ks.closest_note("f#").unwrap();
    assert_eq!(field(&closest, "status").as_f64(), Some(0.0));
    let value = field(&closest, "value");
    assert_eq!(field(&value, "name").as_string().as_deref(), Some("f"));

    let inverted = ks.invert("e", 0, "c", 0, "upside").unwrap();
    assert_eq!(field(&inverted, "status").as_f64(), Some(-6.0));
}

#[wasm_bindgen_test]
fn test_custom_note_names() {
    let mut ks = KeySignatureHandle::new("major pentatonic", "c", None);
    let names: js_sys::Array = ["a1", "a2", "a3"].iter().map(|s| JsValue::from_str(s)).collect();
    assert_eq!(ks.set_custom_note_names(names), -4);

    let names: js_sys::Array = ["p1", "p2", "p3", "p4", "p5"].iter().map(|s| JsValue::from_str(s)).collect();
    assert_eq!(ks.set_custom_note_names(names), 0);
    assert_eq!(ks.get_custom_note_names().map(|a| a.length()), Some(5));
}

#[wasm_bindgen_test]
fn test_free_functions() {
    assert_eq!(normalize_pitch("C♯"), "c#");
    assert_eq!(display_pitch("bb"), "B♭");
    assert_eq!(classify_pitch("dha"), NotationKind::EastIndian);

    let catalog = get_mode_catalog().unwrap();
    assert!(js_sys::Array::is_array(&field(&catalog, "modes")));
}
