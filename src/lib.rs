//! Pitch Algebra WASM Module
//!
//! Scales, key signatures and pitch arithmetic over equal temperaments,
//! with pitch names in letter, solfege, east-indian, scalar-number,
//! generic and caller-defined notations.

pub mod errors;
pub mod models;
pub mod scale;
pub mod key_signature;
pub mod modegen;
pub mod api;

// Re-export commonly used types
pub use errors::{MusicError, Outcome};
pub use key_signature::{ClosestNote, DegreeNames, InvertMode, Inverted, KeySignature, ScalarDistance, Transposed};
pub use models::{ClassifiedPitch, NotationKind};
pub use scale::Scale;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            crate::wasm_warn!("failed to initialize logger: {}", e);
        }
    }

    log::info!("Pitch algebra WASM module initialized");
}
