//! Models module for pitch notation
//!
//! Stateless building blocks shared by the scale and key-signature layers:
//! accidental handling, enharmonic tables, notation classification and the
//! per-notation pitch systems.

pub mod accidental;
pub mod enharmonics;
pub mod notation;
pub mod pitch_systems;

// Re-export commonly used types
pub use accidental::{display, normalize, strip_accidental, Accidental};
pub use enharmonics::{flat_index, sharp_index};
pub use notation::{classify, ClassifiedPitch, NotationKind};
pub use pitch_systems::{
    ChromaticNames, GenericSystem, NumberSystem, SargamSystem, SolfegeSystem, WesternSystem,
};
