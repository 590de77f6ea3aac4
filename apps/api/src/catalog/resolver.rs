//! Occupation Resolver — maps free-text job titles onto catalog records.
//!
//! Two passes, first hit wins:
//! 1. exact key match on the normalized input
//! 2. first record, in catalog order, whose title contains the input
//!
//! Pass 2 is order-dependent on purpose: "nurse" resolves to whichever title
//! containing it was inserted first, not to the closest one.

use crate::catalog::models::OccupationRecord;
use crate::catalog::store::{Catalog, LookupError};

/// Lowercases, trims, and replaces spaces with underscores: "Truck Driver" → "truck_driver".
pub fn normalize_key(title: &str) -> String {
    title.trim().to_lowercase().replace(' ', "_")
}

impl Catalog {
    pub fn resolve(&self, input: &str) -> Result<&OccupationRecord, LookupError> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            // an empty needle is a substring of every title
            return Err(LookupError::NotFound(input.to_string()));
        }

        let key = normalize_key(&needle);
        if self.contains_key(&key) {
            return self.get(&key);
        }

        self.all_records()
            .find(|record| record.title.to_lowercase().contains(&needle))
            .ok_or_else(|| LookupError::NotFound(input.to_string()))
    }
}
