/// Integration tests for the pitch algebra
///
/// Property-style checks over several keys and modes, plus the worked
/// C major examples.

use musicutils_wasm::models::pitch_systems::western::{CHROMATIC_FLAT, CHROMATIC_SHARP};
use musicutils_wasm::{ClosestNote, Inverted, KeySignature, Transposed};

const KEYS: [&str; 6] = ["c", "g", "f", "bb", "e", "f#"];
const MODES: [&str; 6] = ["major", "minor", "harmonic minor", "major pentatonic", "whole tone", "diminished"];

fn key_signatures() -> Vec<KeySignature> {
    KEYS.iter()
        .flat_map(|key| MODES.iter().map(move |mode| KeySignature::new(mode, key, 12)))
        .collect()
}

fn all_spellings() -> impl Iterator<Item = &'static str> {
    CHROMATIC_SHARP.into_iter().chain(CHROMATIC_FLAT)
}

#[test]
fn test_c_major_examples() {
    let ks = KeySignature::new("major", "c", 12);

    let f_sharp = ks.closest_note("f#");
    assert!(f_sharp.is_ok());
    assert_eq!(f_sharp.value.name, "f");
    assert!(!ks.note_in_scale("f#"));

    assert_eq!(ks.closest_note("cb").value, ClosestNote { name: "b".into(), index: 6, distance: 0 });
    assert!(ks.note_in_scale("cb"));

    assert_eq!(ks.generic_name("n10#").value, "n11");
    assert_eq!(ks.generic_name("n10x").value, "n0");
    assert_eq!(ks.closest_note("sol").value.name, "sol");
    assert_eq!(ks.closest_note("pa").value.name, "pa");
}

#[test]
fn test_distance_runs_from_second_pitch_to_first() {
    let ks = KeySignature::new("major", "c", 12);
    assert_eq!(ks.semitone_distance("c", 0, "g", 0).value, -7);
    assert_eq!(ks.semitone_distance("g", 0, "c", 0).value, 7);
    assert_eq!(ks.scalar_distance("c", 0, "g", 0).value.steps, -4);
    assert_eq!(ks.scalar_distance("a", 0, "c", 0).value.steps, 5);
}

#[test]
fn test_closest_note_is_reflexive_on_degrees() {
    for ks in key_signatures() {
        for (i, name) in ks.scale().iter().enumerate() {
            let closest = ks.closest_note(name).value;
            assert_eq!(closest.distance, 0, "{} in {}", name, ks);
            assert_eq!(&closest.name, name, "{}", ks);
            assert_eq!(closest.index as usize, i % ks.mode_length());
        }
    }
}

#[test]
fn test_note_in_scale_matches_zero_distance() {
    for ks in key_signatures() {
        for name in all_spellings() {
            let closest = ks.closest_note(name);
            assert!(closest.is_ok());
            assert_eq!(ks.note_in_scale(name), closest.value.distance == 0, "{} in {}", name, ks);
        }
    }
}

#[test]
fn test_semitone_identity_and_octave() {
    for ks in key_signatures() {
        for name in all_spellings() {
            assert_eq!(
                ks.semitone_transform(name, 0).value,
                Transposed { name: name.to_string(), octave_delta: 0 }
            );
            assert_eq!(
                ks.semitone_transform(name, 12).value,
                Transposed { name: name.to_string(), octave_delta: 1 }
            );
            assert_eq!(ks.semitone_transform(name, -24).value.octave_delta, -2);
        }
    }
}

#[test]
fn test_semitone_transform_agrees_with_distance() {
    let ks = KeySignature::new("major", "d", 12);
    for name in all_spellings() {
        for n in [-13, -5, 1, 7, 11, 25] {
            let moved = ks.semitone_transform(name, n).value;
            let distance = ks.semitone_distance(&moved.name, moved.octave_delta, name, 0);
            assert_eq!(distance.value, n, "{} + {}", name, n);
        }
    }
}

#[test]
fn test_scalar_transform_agrees_with_distance() {
    for ks in key_signatures() {
        for name in ks.scale() {
            for n in [-8, -1, 1, 3, 9] {
                let moved = ks.scalar_transform(&name, n).value;
                let distance = ks.scalar_distance(&moved.name, moved.octave_delta, &name, 0).value;
                assert_eq!(distance.steps, n, "{} + {} in {}", name, n, ks);
                assert_eq!(distance.rounding_error, 0);
            }
        }
    }
}

#[test]
fn test_full_scalar_cycle_returns_an_octave_up() {
    for ks in key_signatures() {
        let length = ks.mode_length() as i32;
        for name in ks.scale() {
            let moved = ks.scalar_transform(&name, length).value;
            assert_eq!(moved, Transposed { name: name.clone(), octave_delta: 1 }, "{}", ks);
        }
    }
}

#[test]
fn test_even_and_odd_inversion_are_involutions() {
    let ks = KeySignature::new("major", "c", 12);
    for axis in ["c", "e", "n5"] {
        for i in 0..12 {
            let pitch = format!("n{}", i);
            for mode in ["even", "odd"] {
                let once = ks.invert(&pitch, 0, axis, 0, mode).value;
                let twice = ks.invert(&once.name, once.octave, axis, 0, mode).value;
                assert_eq!(twice.name, pitch, "{} around {} ({})", pitch, axis, mode);
                assert_eq!(twice.octave, 0);
            }
        }
    }
}

#[test]
fn test_even_inversion_of_letters_keeps_pitch_class() {
    let ks = KeySignature::new("major", "c", 12);
    for name in all_spellings() {
        let once = ks.invert(name, 0, "c", 0, "even").value;
        let twice = ks.invert(&once.name, once.octave, "c", 0, "even").value;
        assert_eq!(ks.generic_name(&twice.name).value, ks.generic_name(name).value, "{}", name);
        assert_eq!(twice.octave, 0);
    }

    // the return trip is spelled from the key, not from the original name
    let once = ks.invert("eb", 0, "c", 0, "even").value;
    assert_eq!(once, Inverted { name: "a".into(), octave: -1 });
    let twice = ks.invert(&once.name, once.octave, "c", 0, "even").value;
    assert_eq!(twice, Inverted { name: "d#".into(), octave: 0 });
}

#[test]
fn test_scalar_inversion_is_involution_in_scale() {
    for ks in key_signatures() {
        let scale = ks.scale();
        let axis = &scale[1];
        for name in &scale {
            let once = ks.invert(name, 0, axis, 0, "scalar").value;
            assert!(ks.note_in_scale(&once.name));
            let twice = ks.invert(&once.name, once.octave, axis, 0, "scalar").value;
            assert_eq!(&twice.name, name, "{} around {} in {}", name, axis, ks);
            assert_eq!(twice.octave, 0);
        }
    }
}

#[test]
fn test_results_keep_the_input_notation() {
    let ks = KeySignature::new("major", "c", 12);
    assert_eq!(ks.semitone_transform("re", 2).value.name, "me");
    assert_eq!(ks.semitone_transform("sa", 7).value.name, "pa");
    assert_eq!(ks.semitone_transform("3", 2).value.name, "4#");
    assert_eq!(ks.semitone_transform("n3", 2).value.name, "n5");
    assert_eq!(ks.scalar_transform("ga", -2).value, Transposed { name: "sa".into(), octave_delta: 0 });
}

#[test]
fn test_failures_report_status() {
    let ks = KeySignature::new("major", "c", 12);
    assert_eq!(ks.semitone_transform("zz", 3).status(), -1);
    assert_eq!(ks.semitone_transform("zz", 3).value.name, "zz");
    assert_eq!(ks.scalar_distance("c", 0, "??", 0).status(), -1);
    assert_eq!(ks.invert("c", 0, "zz", 0, "even").status(), -1);
    assert_eq!(ks.invert("c", 0, "e", 0, "twice").status(), -6);
}
