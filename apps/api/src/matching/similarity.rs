//! Similarity Engine — ranks strictly safer occupations by skill-vector cosine similarity.
//!
//! Pure Rust, deterministic, no I/O. Holds the catalog behind an `Arc` so the
//! engine can be cloned into request state cheaply.
//!
//! Algorithm:
//! 1. Skip the source itself (title equality) and every candidate with
//!    `risk_score >= source.risk_score`
//! 2. Score the rest by cosine similarity of `skill_vector`
//! 3. Stable sort by (similarity, risk_reduction) descending, so ties keep catalog order
//! 4. Truncate to `top_k`

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, OccupationRecord};
use crate::matching::skill_gap::skill_gap;

/// A lower-risk occupation suggested as a pivot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaferRole {
    /// Catalog key of the candidate, used internally to fetch the full record.
    #[serde(skip)]
    pub key: String,
    pub title: String,
    pub risk_score: f64,
    pub similarity: f64, // -1.0 – 1.0
    pub risk_reduction: f64,
}

/// Cosine similarity `dot(a, b) / (|a| * |b|)`.
///
/// Returns 0.0 when either vector has zero norm, or when the dimensions differ.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[derive(Debug, Clone)]
pub struct SimilarityEngine {
    catalog: Arc<Catalog>,
}

impl SimilarityEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Up to `top_k` strictly safer occupations, most similar first.
    pub fn find_safer_alternatives(&self, source: &OccupationRecord, top_k: usize) -> Vec<SaferRole> {
        if top_k == 0 {
            return Vec::new();
        }

        let mut candidates: Vec<SaferRole> = self
            .catalog
            .all_records()
            .filter(|candidate| candidate.title != source.title)
            .filter(|candidate| candidate.risk_score < source.risk_score)
            .map(|candidate| SaferRole {
                key: candidate.key.clone(),
                title: candidate.title.clone(),
                risk_score: candidate.risk_score,
                similarity: cosine_similarity(&source.skill_vector, &candidate.skill_vector),
                risk_reduction: source.risk_score - candidate.risk_score,
            })
            .collect();

        // sort_by is stable: equal keys stay in catalog order
        candidates.sort_by(rank_descending);
        candidates.truncate(top_k);
        candidates
    }

    /// Skills the `target` occupation lists that `source` does not.
    pub fn skill_gap(&self, source: &OccupationRecord, target: &OccupationRecord) -> Vec<String> {
        skill_gap(source, target)
    }
}

fn rank_descending(a: &SaferRole, b: &SaferRole) -> Ordering {
    b.similarity
        .total_cmp(&a.similarity)
        .then_with(|| b.risk_reduction.total_cmp(&a.risk_reduction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::record;

    fn engine(records: Vec<OccupationRecord>) -> SimilarityEngine {
        SimilarityEngine::new(Arc::new(Catalog::from_records(records).unwrap()))
    }

    fn seeded_engine() -> SimilarityEngine {
        SimilarityEngine::new(Arc::new(Catalog::seeded().unwrap()))
    }

    #[test]
    fn test_cosine_identical_vectors_is_one() {
        let v = [0.3, 0.2, 0.6, 0.7, 0.4];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_orthogonal_is_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_cosine_is_symmetric() {
        let catalog = Catalog::seeded().unwrap();
        let records: Vec<_> = catalog.all_records().collect();
        for a in &records {
            for b in &records {
                let ab = cosine_similarity(&a.skill_vector, &b.skill_vector);
                let ba = cosine_similarity(&b.skill_vector, &a.skill_vector);
                assert_eq!(ab, ba, "{} vs {}", a.key, b.key);
            }
        }
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0, 0.0], &[0.5, 0.1, 0.2]), 0.0);
        assert_eq!(cosine_similarity(&[0.5, 0.1, 0.2], &[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0], &[0.0]), 0.0);
    }

    #[test]
    fn test_cosine_dimension_mismatch_is_zero() {
        assert_eq!(cosine_similarity(&[1.0, 1.0], &[1.0]), 0.0);
    }

    #[test]
    fn test_only_strictly_safer_candidates_returned() {
        let engine = engine(vec![
            record("Truck Driver", 79.0, vec![0.3, 0.2, 0.6, 0.7, 0.4]),
            record("Software Engineer", 45.2, vec![0.8, 0.9, 0.7, 0.6, 0.5]),
            record("Registered Nurse", 18.5, vec![0.2, 0.4, 0.9, 0.8, 0.7]),
            record("Data Analyst", 62.3, vec![0.7, 0.8, 0.6, 0.5, 0.6]),
            record("Crane Operator", 85.2, vec![0.3, 0.2, 0.6, 0.7, 0.4]),
            record("Mental Health Therapist", 12.1, vec![0.1, 0.3, 0.95, 0.9, 0.85]),
        ]);
        let source = engine.catalog().get("truck_driver").unwrap().clone();

        let roles = engine.find_safer_alternatives(&source, 10);
        assert_eq!(roles.len(), 4);
        assert!(roles.iter().all(|r| r.risk_score < 79.0));
        assert!(roles.iter().all(|r| r.title != "Crane Operator"));

        let titles: Vec<_> = roles.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Registered Nurse",
                "Mental Health Therapist",
                "Software Engineer",
                "Data Analyst",
            ]
        );
        for pair in roles.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
        let nurse = &roles[0];
        assert!((nurse.risk_reduction - (79.0 - 18.5)).abs() < 1e-9);
        assert_eq!(nurse.key, "registered_nurse");
    }

    #[test]
    fn test_equal_risk_is_excluded() {
        let engine = engine(vec![
            record("Baker", 50.0, vec![1.0, 0.0]),
            record("Brewer", 50.0, vec![1.0, 0.0]),
        ]);
        let source = engine.catalog().get("baker").unwrap().clone();
        assert!(engine.find_safer_alternatives(&source, 3).is_empty());
    }

    #[test]
    fn test_ties_on_similarity_broken_by_risk_reduction() {
        let engine = engine(vec![
            record("Source", 80.0, vec![1.0, 0.0]),
            record("Small Drop", 70.0, vec![2.0, 0.0]),
            record("Big Drop", 10.0, vec![3.0, 0.0]),
        ]);
        let source = engine.catalog().get("source").unwrap().clone();
        let roles = engine.find_safer_alternatives(&source, 3);
        assert_eq!(roles[0].title, "Big Drop");
        assert_eq!(roles[1].title, "Small Drop");
    }

    #[test]
    fn test_full_ties_keep_catalog_order() {
        let engine = engine(vec![
            record("Source", 80.0, vec![1.0, 0.0]),
            record("Zeta", 40.0, vec![2.0, 0.0]),
            record("Alpha", 40.0, vec![3.0, 0.0]),
            record("Mid", 40.0, vec![1.0, 0.0]),
        ]);
        let source = engine.catalog().get("source").unwrap().clone();
        let titles: Vec<_> = engine
            .find_safer_alternatives(&source, 3)
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_zero_vector_candidate_ranks_with_zero_similarity() {
        let engine = engine(vec![
            record("Source", 80.0, vec![1.0, 0.0]),
            record("Blank", 10.0, vec![0.0, 0.0]),
            record("Close", 60.0, vec![1.0, 0.1]),
        ]);
        let source = engine.catalog().get("source").unwrap().clone();
        let roles = engine.find_safer_alternatives(&source, 5);
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[1].title, "Blank");
        assert_eq!(roles[1].similarity, 0.0);
    }

    #[test]
    fn test_top_k_truncates_and_zero_is_empty() {
        let engine = seeded_engine();
        let source = engine.catalog().get("truck_driver").unwrap().clone();
        assert_eq!(engine.find_safer_alternatives(&source, 3).len(), 3);
        assert_eq!(engine.find_safer_alternatives(&source, 1).len(), 1);
        assert!(engine.find_safer_alternatives(&source, 0).is_empty());
    }

    #[test]
    fn test_lowest_risk_occupation_has_no_alternatives() {
        let engine = seeded_engine();
        let source = engine.catalog().get("mental_health_therapist").unwrap().clone();
        assert!(engine.find_safer_alternatives(&source, 3).is_empty());
    }

    #[test]
    fn test_invariants_hold_for_every_seed_occupation() {
        let engine = seeded_engine();
        for source in engine.catalog().all_records() {
            let roles = engine.find_safer_alternatives(source, 5);
            assert!(roles.len() <= 5);
            for role in &roles {
                assert!(role.risk_score < source.risk_score);
                assert_ne!(role.title, source.title);
            }
            for pair in roles.windows(2) {
                assert_ne!(rank_descending(&pair[0], &pair[1]), Ordering::Greater);
            }
        }
    }

    #[test]
    fn test_serialized_role_omits_key() {
        let role = SaferRole {
            key: "chef".to_string(),
            title: "Chef".to_string(),
            risk_score: 38.4,
            similarity: 0.9,
            risk_reduction: 10.0,
        };
        let json = serde_json::to_value(&role).unwrap();
        assert!(json.get("key").is_none());
        assert_eq!(json["title"], "Chef");
    }
}
