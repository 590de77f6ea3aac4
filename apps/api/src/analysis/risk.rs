//! Risk presentation — pure derivations from a resolved occupation record.
//!
//! `automation_progress` is a presentation flourish (risk + jitter), not a
//! re-estimate. Everything else here is deterministic.

use serde::{Deserialize, Serialize};

use crate::catalog::TaskSplit;

/// Hours of retraining budgeted per missing skill.
pub const HOURS_PER_SKILL: u32 = 40;

/// Two-valued on purpose: there is no "Low".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
}

/// Tier used to pick the doom message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    High,
    Medium,
    Low,
}

/// Task split as percentages plus the task lists themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskBreakdown {
    pub automatable: u32,    // 0 – 100
    pub human_required: u32, // always 100 - automatable
    pub automatable_tasks: Vec<String>,
    pub human_tasks: Vec<String>,
}

/// `risk_score + jitter`, capped at 100 and floored at 0.
pub fn automation_progress(risk_score: f64, jitter: f64) -> f64 {
    (risk_score + jitter).clamp(0.0, 100.0)
}

/// "High" at both extremes (> 50 or < 30), "Medium" in between.
pub fn confidence(risk_score: f64) -> Confidence {
    if risk_score > 50.0 || risk_score < 30.0 {
        Confidence::High
    } else {
        Confidence::Medium
    }
}

/// high: > 60, medium: (35, 60], low: <= 35.
pub fn risk_tier(risk_score: f64) -> RiskTier {
    if risk_score > 60.0 {
        RiskTier::High
    } else if risk_score > 35.0 {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}

/// Automatable share rounded to the nearest integer; the human share is the
/// remainder so the pair always sums to 100. A record with no tasks at all
/// reports 0% automatable.
pub fn task_breakdown(tasks: &TaskSplit) -> TaskBreakdown {
    let total = tasks.total();
    let automatable = if total == 0 {
        0
    } else {
        ((tasks.automatable.len() as f64 / total as f64) * 100.0).round() as u32
    };

    TaskBreakdown {
        automatable,
        human_required: 100 - automatable,
        automatable_tasks: tasks.automatable.clone(),
        human_tasks: tasks.human_required.clone(),
    }
}

/// `None` when there is nothing to learn: "no estimate" is not "zero hours".
pub fn retraining_hours(skills_to_learn: &[String]) -> Option<u32> {
    if skills_to_learn.is_empty() {
        None
    } else {
        Some(skills_to_learn.len() as u32 * HOURS_PER_SKILL)
    }
}

/// Rounds to one decimal place for display.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
