//! Analysis pipeline — turns a resolved occupation into the `/analyze` payload.
//!
//! Pipeline: risk presentation → safer roles → skill gap to the top pivot →
//! retraining estimate → doom message. The generator is passed in so tests can
//! pin every random choice.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::analysis::jitter::JitterRange;
use crate::analysis::messages::doom_message;
use crate::analysis::risk::{
    automation_progress, confidence, retraining_hours, risk_tier, round1, task_breakdown,
    Confidence, TaskBreakdown,
};
use crate::catalog::OccupationRecord;
use crate::config::Config;
use crate::matching::{SaferRole, SimilarityEngine};

/// Tunables for one analysis, derived from `Config`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisSettings {
    pub top_k: usize,
    pub jitter: JitterRange,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            top_k: 3,
            jitter: JitterRange::default(),
        }
    }
}

impl From<&Config> for AnalysisSettings {
    fn from(config: &Config) -> Self {
        Self {
            top_k: config.safer_roles_top_k,
            jitter: JitterRange {
                min: config.jitter_min,
                max: config.jitter_max,
            },
        }
    }
}

/// Full `/analyze` response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub job_title: String,
    pub risk_score: f64,
    pub automation_progress: f64,
    pub confidence: Confidence,
    pub tech_drivers: Vec<String>,
    pub task_breakdown: TaskBreakdown,
    pub safer_roles: Vec<SaferRole>,
    pub skills_to_learn: Vec<String>,
    pub doom_message: String,
    pub retraining_hours: Option<u32>,
}

pub fn analyze_occupation<R: Rng>(
    engine: &SimilarityEngine,
    record: &OccupationRecord,
    settings: &AnalysisSettings,
    rng: &mut R,
) -> AnalysisReport {
    let risk_score = record.risk_score;
    let progress = automation_progress(risk_score, settings.jitter.sample(rng));

    let safer_roles = engine.find_safer_alternatives(record, settings.top_k);

    let skills_to_learn = safer_roles
        .first()
        .and_then(|top| engine.catalog().get(&top.key).ok())
        .map(|target| engine.skill_gap(record, target))
        .unwrap_or_default();

    let doom_message = doom_message(risk_tier(risk_score), risk_score, rng);

    AnalysisReport {
        job_title: record.title.clone(),
        risk_score: round1(risk_score),
        automation_progress: round1(progress),
        confidence: confidence(risk_score),
        tech_drivers: record.tech_threats.clone(),
        task_breakdown: task_breakdown(&record.tasks),
        retraining_hours: retraining_hours(&skills_to_learn),
        safer_roles,
        skills_to_learn,
        doom_message,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::analysis::messages::messages_for;
    use crate::analysis::risk::RiskTier;
    use crate::catalog::Catalog;

    fn seeded_engine() -> SimilarityEngine {
        SimilarityEngine::new(Arc::new(Catalog::seeded().unwrap()))
    }

    #[test]
    fn test_truck_driver_report() {
        let engine = seeded_engine();
        let record = engine.catalog().get("truck_driver").unwrap().clone();
        let mut rng = StdRng::seed_from_u64(11);

        let report = analyze_occupation(&engine, &record, &AnalysisSettings::default(), &mut rng);

        assert_eq!(report.job_title, "Truck Driver");
        assert_eq!(report.risk_score, 79.0);
        assert!((74.0..=89.0).contains(&report.automation_progress));
        assert_eq!(report.confidence, Confidence::High);
        assert_eq!(report.tech_drivers, record.tech_threats);
        assert_eq!(report.task_breakdown.automatable, 50);
        assert_eq!(report.task_breakdown.human_required, 50);
        assert_eq!(report.safer_roles.len(), 3);
        assert!(report.safer_roles.iter().all(|r| r.risk_score < 79.0));

        let top = engine.catalog().get(&report.safer_roles[0].key).unwrap();
        let expected: HashSet<_> = engine.skill_gap(&record, top).into_iter().collect();
        let actual: HashSet<_> = report.skills_to_learn.iter().cloned().collect();
        assert_eq!(actual, expected);
        assert_eq!(
            report.retraining_hours,
            Some(report.skills_to_learn.len() as u32 * 40)
        );

        let pool: Vec<String> = messages_for(RiskTier::High)
            .iter()
            .map(|t| t.replace("{pct}", "79"))
            .collect();
        assert!(pool.contains(&report.doom_message));
    }

    #[test]
    fn test_safest_occupation_has_no_pivot_and_no_hours() {
        let engine = seeded_engine();
        let record = engine.catalog().get("mental_health_therapist").unwrap().clone();
        let mut rng = StdRng::seed_from_u64(1);

        let report = analyze_occupation(&engine, &record, &AnalysisSettings::default(), &mut rng);

        assert!(report.safer_roles.is_empty());
        assert!(report.skills_to_learn.is_empty());
        assert_eq!(report.retraining_hours, None);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["retraining_hours"].is_null());
    }

    #[test]
    fn test_fixed_jitter_gives_exact_progress() {
        let engine = seeded_engine();
        let record = engine.catalog().get("software_engineer").unwrap().clone();
        let settings = AnalysisSettings {
            top_k: 3,
            jitter: JitterRange { min: 4.0, max: 4.0 },
        };
        let report = analyze_occupation(&engine, &record, &settings, &mut StdRng::seed_from_u64(5));
        assert_eq!(report.automation_progress, 49.2);
        assert_eq!(report.confidence, Confidence::Medium);
    }

    #[test]
    fn test_same_seed_same_report() {
        let engine = seeded_engine();
        let record = engine.catalog().get("paralegal").unwrap().clone();
        let settings = AnalysisSettings::default();
        let a = analyze_occupation(&engine, &record, &settings, &mut StdRng::seed_from_u64(99));
        let b = analyze_occupation(&engine, &record, &settings, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_top_k_from_settings() {
        let engine = seeded_engine();
        let record = engine.catalog().get("accountant").unwrap().clone();
        let settings = AnalysisSettings {
            top_k: 5,
            ..AnalysisSettings::default()
        };
        let report = analyze_occupation(&engine, &record, &settings, &mut StdRng::seed_from_u64(2));
        assert_eq!(report.safer_roles.len(), 5);
    }

    #[test]
    fn test_settings_from_config() {
        let config = Config {
            safer_roles_top_k: 4,
            jitter_min: -1.0,
            jitter_max: 2.0,
            ..Config::default()
        };
        let settings = AnalysisSettings::from(&config);
        assert_eq!(settings.top_k, 4);
        assert_eq!(settings.jitter, JitterRange { min: -1.0, max: 2.0 });
    }
}
