//! Letter spelling of 12-division scales
//!
//! A scale walked through a chromatic alphabet can repeat or skip letters
//! (`c c# d#` or `bb db`). Normalization respells degrees so each one
//! sits on its own letter where the mode allows it.

use crate::models::accidental::{strip_accidental, Accidental};
use crate::models::enharmonics::{convert_down, convert_up, equivalent_sharp};
use crate::models::pitch_systems::western::WesternSystem;

/// Respell a closed scale (root repeated at the end) in place
pub fn normalize_scale(scale: &mut [String], key: &str, prefer_sharps: bool) {
    let closing = scale.len().saturating_sub(1);
    if closing == 0 {
        return;
    }

    if scale.len() < 9 {
        if !prefer_sharps && key.contains('#') {
            sharpen_flats(scale);
        }
        if closing == 7 {
            fill_skipped_letters(&mut scale[..closing]);
        }
        separate_repeated_letters(&mut scale[..closing]);
    } else if key.contains('#') {
        sharpen_flats(scale);
    }

    collapse_double_accidentals(scale);
    scale[closing] = scale[0].clone();
}

fn sharpen_flats(scale: &mut [String]) {
    for note in scale.iter_mut() {
        if note.contains('b') {
            if let Some(sharp) = equivalent_sharp(note) {
                *note = sharp.to_string();
            }
        }
    }
}

/// Seven-note modes use every letter once
fn fill_skipped_letters(degrees: &mut [String]) {
    for i in 1..degrees.len() {
        let gap = WesternSystem::letter_gap(&degrees[i - 1], &degrees[i]);
        if matches!(gap, Some(g) if g > 1) {
            if let Some(lower) = convert_down(&degrees[i]) {
                degrees[i] = lower.to_string();
            }
        }
    }
}

fn separate_repeated_letters(degrees: &mut [String]) {
    for i in 0..degrees.len().saturating_sub(1) {
        if !WesternSystem::same_letter(&degrees[i], &degrees[i + 1]) {
            continue;
        }
        if i > 0 {
            if let Some(lower) = convert_down(&degrees[i]) {
                if !WesternSystem::same_letter(lower, &degrees[i - 1]) {
                    degrees[i] = lower.to_string();
                    continue;
                }
            }
        }
        // root, or a respelling that would clash behind us
        if let Some(higher) = convert_up(&degrees[i + 1]) {
            degrees[i + 1] = higher.to_string();
        }
    }
}

fn collapse_double_accidentals(scale: &mut [String]) {
    for note in scale.iter_mut() {
        let respelled = if note.contains('x') {
            convert_up(note)
        } else if note.len() > 2 && note.ends_with("bb") {
            convert_down(note)
        } else {
            None
        };
        if let Some(single) = respelled {
            *note = single.to_string();
        }
    }
}

/// Map a spelled scale onto the stems of another notation by letter
/// distance from the root
///
/// Modes with more than seven degrees repeat letters, so their names keep
/// the letter's accidental.
pub fn mode_map_list(scale: &[String], stems: &[&str; 7]) -> Vec<String> {
    let mode_length = scale.len().saturating_sub(1);
    let Some(first) = scale.first() else {
        return Vec::new();
    };
    let offset = WesternSystem::letter_index(first).unwrap_or(0);

    let mut names: Vec<String> = scale
        .iter()
        .map(|note| {
            let j = (WesternSystem::letter_index(note).unwrap_or(0) + 7 - offset) % 7;
            if mode_length < 8 {
                stems[j].to_string()
            } else {
                let accidental = Accidental::from_offset(strip_accidental(note).1)
                    .map_or("", Accidental::ascii);
                format!("{}{}", stems[j], accidental)
            }
        })
        .collect();

    if let Some(last) = names.len().checked_sub(1) {
        names[last] = names[0].clone();
    }
    names
}
