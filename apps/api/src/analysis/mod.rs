// Occupation analysis: the `/analyze` pipeline and its presentation derivations.
// Randomness (jitter, message choice) always comes from an injected generator.

pub mod handlers;
pub mod jitter;
pub mod messages;
pub mod report;
pub mod risk;
