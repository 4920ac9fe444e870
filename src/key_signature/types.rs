//! Result types returned by the pitch algebra

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::MusicError;

/// Nearest scale degree to a pitch
///
/// `distance` is `degree - target` in temperament steps, so a negative
/// distance means the degree sits below the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClosestNote {
    pub name: String,
    pub index: i32,
    pub distance: i32,
}

impl ClosestNote {
    pub(crate) fn not_found(name: String) -> Self {
        Self {
            name,
            index: -1,
            distance: -1,
        }
    }
}

/// A pitch moved by some interval, with the octaves it crossed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transposed {
    pub name: String,
    pub octave_delta: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScalarDistance {
    /// Scale steps from the first pitch to the second
    pub steps: i32,

    /// Sum of both pitches' offsets from their nearest degrees
    pub rounding_error: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inverted {
    pub name: String,
    pub octave: i32,
}

/// How `invert` reflects a pitch around its axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvertMode {
    /// Reflect around the axis pitch itself
    Even,
    /// Reflect around the point half a step above the axis
    Odd,
    /// Reflect in scale steps
    Scalar,
}

impl FromStr for InvertMode {
    type Err = MusicError;

    /// Accepts the mode names or any integer, whose parity picks even/odd
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mode = s.trim().to_lowercase();
        match mode.as_str() {
            "even" => Ok(InvertMode::Even),
            "odd" => Ok(InvertMode::Odd),
            "scalar" => Ok(InvertMode::Scalar),
            other => match other.parse::<i64>() {
                Ok(n) if n % 2 == 0 => Ok(InvertMode::Even),
                Ok(_) => Ok(InvertMode::Odd),
                Err(_) => Err(MusicError::InvertModeError(s.to_string())),
            },
        }
    }
}

impl fmt::Display for InvertMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InvertMode::Even => "even",
            InvertMode::Odd => "odd",
            InvertMode::Scalar => "scalar",
        };
        f.write_str(name)
    }
}
