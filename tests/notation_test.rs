/// Integration tests for pitch-name handling
///
/// Covers accidental stripping, normalization/display round trips,
/// notation classification and the strict chromatic index lookups.

use musicutils_wasm::models::accidental::{display, normalize, strip_accidental};
use musicutils_wasm::models::enharmonics::{flat_index, sharp_index};
use musicutils_wasm::models::pitch_systems::western::{CHROMATIC_FLAT, CHROMATIC_SHARP};
use musicutils_wasm::models::{classify, ChromaticNames, WesternSystem};
use musicutils_wasm::{MusicError, NotationKind};

const LETTERS: [&str; 7] = ["c", "d", "e", "f", "g", "a", "b"];
const ACCIDENTALS: [&str; 5] = ["bb", "b", "", "#", "x"];

#[test]
fn test_stripped_accidental_preserves_pitch_class() {
    for letter in LETTERS {
        for acc in ACCIDENTALS {
            let name = format!("{}{}", letter, acc);
            let (stem, offset) = strip_accidental(&name);
            let whole = WesternSystem::chromatic_index(&name).unwrap() as i32;
            let base = WesternSystem::chromatic_index(stem).unwrap() as i32;
            assert_eq!((base + offset).rem_euclid(12), whole, "{}", name);
        }
    }
}

#[test]
fn test_unicode_and_ascii_agree() {
    assert_eq!(strip_accidental(&normalize("D♭")), ("d", -1));
    assert_eq!(strip_accidental("d♭"), ("d", -1));
    assert_eq!(normalize("G𝄪"), "gx");
    assert_eq!(normalize("  A♮ "), "a");
}

#[test]
fn test_display_normalize_roundtrip() {
    for name in CHROMATIC_SHARP.iter().chain(CHROMATIC_FLAT.iter()) {
        assert_eq!(normalize(&display(name)), *name);
    }
    for name in ["cb", "d#", "e#", "fbb", "gx", "bbb"] {
        assert_eq!(normalize(&display(name)), name);
    }
    assert_eq!(display("bbb"), "B𝄫");
}

#[test]
fn test_normalize_idempotent() {
    for name in ["C♯", "B♭", "Ebb", "F𝄪", "Sol", "DHA♭", "n10#", "7b"] {
        let once = normalize(name);
        assert_eq!(normalize(&once), once, "{}", name);
    }
}

#[test]
fn test_classify_every_family() {
    let custom = vec!["alpha".to_string(), "beta".to_string()];
    let cases = [
        ("E♭", NotationKind::Letter),
        ("n0", NotationKind::Generic),
        ("n20b", NotationKind::Generic),
        ("La#", NotationKind::Solfege),
        ("Ni", NotationKind::EastIndian),
        ("gab", NotationKind::EastIndian),
        ("6b", NotationKind::ScalarNumber),
        ("beta", NotationKind::Custom),
        ("alpha#", NotationKind::Custom),
        ("gamma", NotationKind::Unknown),
        ("8", NotationKind::Unknown),
    ];
    for (name, kind) in cases {
        assert_eq!(classify(name, &custom), kind, "{}", name);
    }
}

#[test]
fn test_strict_indices() {
    for (i, name) in CHROMATIC_SHARP.iter().enumerate() {
        assert_eq!(sharp_index(name), Ok(i));
        assert_eq!(flat_index(CHROMATIC_FLAT[i]), Ok(i));
    }
    assert_eq!(sharp_index("gbb"), Ok(5));
    assert_eq!(flat_index("bx"), Ok(1));
    assert!(matches!(flat_index("do"), Err(MusicError::NotationError(_))));
}
