// Pivot recommendation: safer-role ranking and skill gap derivation.
// No I/O here; everything runs against the in-memory catalog.

pub mod similarity;
pub mod skill_gap;

pub use similarity::{SaferRole, SimilarityEngine};
