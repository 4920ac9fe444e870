//! Number system pitch implementation
//!
//! The number system uses numbers 1-7 to represent the
//! seven degrees of the musical scale.

use super::ChromaticNames;
use crate::models::notation::NotationKind;

/// Number (scalar mode number) system implementation
pub struct NumberSystem;

impl ChromaticNames for NumberSystem {
    const KIND: NotationKind = NotationKind::ScalarNumber;
    const STEMS: [&'static str; 7] = ["1", "2", "3", "4", "5", "6", "7"];
    const SHARP: [&'static str; 12] =
        ["1", "1#", "2", "2#", "3", "4", "4#", "5", "5#", "6", "6#", "7"];
    const FLAT: [&'static str; 12] =
        ["1", "2b", "2", "3b", "3", "4", "5b", "5", "6b", "6", "7b", "7"];
}
