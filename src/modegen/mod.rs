//! Mode catalog specification and generation module
//!
//! This module defines the ModeCatalog structures and validation logic
//! for the named scales the engine knows about. It's used by build.rs to:
//! 1. Parse and validate data/modes.yaml
//! 2. Emit modes.rs (static tables compiled into the crate)
//! 3. Emit modes.json for JavaScript consumers
//!
//! The module only refers to its own items so build.rs can include it
//! with a `#[path]` attribute.

pub mod parser;
pub mod emitter;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The complete mode catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeCatalog {
    pub modes: Vec<ModeSpec>,
    pub maqam_overrides: Vec<MaqamOverride>,

    /// "{key} {mode}" pairs that are spelled with sharps
    pub prefer_sharps: Vec<String>,
}

/// A named interval pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeSpec {
    /// Lowercase mode name, e.g. "harmonic minor"
    pub name: String,

    /// Semitone steps between consecutive degrees
    pub intervals: Vec<u32>,
}

/// A mode name that implies a fixed key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaqamOverride {
    pub mode: String,
    pub key: String,
}

/// Validation result with detailed error messages
#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, msg: String) {
        self.is_valid = false;
        self.errors.push(msg);
    }

    pub fn add_warning(&mut self, msg: String) {
        self.warnings.push(msg);
    }
}

/// Name of the pattern every maqam override selects
pub const MAQAM_MODE: &str = "maqam";

/// Semitones in the octave the catalog is written for
pub const CATALOG_OCTAVE: u32 = 12;

impl ModeCatalog {
    pub fn find(&self, name: &str) -> Option<&ModeSpec> {
        self.modes.iter().find(|m| m.name == name)
    }

    /// Validate the catalog for consistency
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        if self.modes.is_empty() {
            result.add_error("Catalog defines no modes".to_string());
        }

        let mut seen_names = HashMap::new();
        for mode in &self.modes {
            self.check_mode(mode, &mut result);
            if seen_names.insert(mode.name.as_str(), true).is_some() {
                result.add_error(format!("Duplicate mode name: '{}'", mode.name));
            }
        }

        if !self.maqam_overrides.is_empty() && self.find(MAQAM_MODE).is_none() {
            result.add_error(format!(
                "Maqam overrides present but no '{}' mode defined",
                MAQAM_MODE
            ));
        }
        for entry in &self.maqam_overrides {
            if self.find(&entry.mode).is_some() {
                result.add_error(format!(
                    "Maqam override '{}' shadows a catalog mode",
                    entry.mode
                ));
            }
            if !is_plain_key(&entry.key) {
                result.add_error(format!(
                    "Maqam override '{}': key '{}' is not a letter name",
                    entry.mode, entry.key
                ));
            }
        }

        for entry in &self.prefer_sharps {
            match entry.split_once(' ') {
                Some((key, mode)) if is_plain_key(key) => {
                    if self.find(mode).is_none() {
                        result.add_warning(format!(
                            "prefer_sharps entry '{}' names unknown mode '{}'",
                            entry, mode
                        ));
                    }
                }
                _ => result.add_error(format!(
                    "prefer_sharps entry '{}' is not of the form '<key> <mode>'",
                    entry
                )),
            }
        }

        result
    }

    fn check_mode(&self, mode: &ModeSpec, result: &mut ValidationResult) {
        if mode.name.trim().is_empty() {
            result.add_error("Mode with empty name".to_string());
        }
        if mode.name != mode.name.to_lowercase() {
            result.add_error(format!("Mode name '{}' must be lowercase", mode.name));
        }
        if mode.intervals.is_empty() {
            result.add_error(format!("Mode '{}': no intervals", mode.name));
            return;
        }
        if mode.intervals.contains(&0) {
            result.add_error(format!("Mode '{}': zero-semitone step", mode.name));
        }
        let span: u32 = mode.intervals.iter().sum();
        if span != CATALOG_OCTAVE {
            result.add_warning(format!(
                "Mode '{}': intervals span {} semitones, expected {}",
                mode.name, span, CATALOG_OCTAVE
            ));
        }
    }
}

/// Lowercase letter with an optional single accidental
fn is_plain_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some('a'..='g') => matches!(chars.as_str(), "" | "#" | "b"),
        _ => false,
    }
}
