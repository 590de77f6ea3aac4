// Occupation catalog: the read-only data set every request is evaluated against.
// Loaded once at startup from the JSON snapshot, or seeded and persisted when absent.

pub mod models;
pub mod resolver;
pub mod seed;
pub mod store;

pub use models::{OccupationRecord, TaskSplit};
pub use store::{Catalog, LookupError};
