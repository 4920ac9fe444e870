//! Pitch algebra WASM API
//!
//! This module provides the JavaScript-facing API: the `KeySignature`
//! class and the stateless pitch-name functions.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, status reporting and logging
//! - `types`: Result shapes returned to JavaScript
//! - `key_signature`: The `KeySignature` class
//! - `notation`: Free functions over pitch names and the mode catalog

pub mod helpers;
pub mod types;
pub mod key_signature;
pub mod notation;

pub use key_signature::KeySignatureHandle;
pub use notation::{classify_pitch, display_pitch, get_mode_catalog, normalize_pitch, strip_accidental};
