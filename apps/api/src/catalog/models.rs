use serde::{Deserialize, Serialize};

/// Automatable vs human-required tasks for one occupation, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSplit {
    pub automatable: Vec<String>,
    pub human_required: Vec<String>,
}

impl TaskSplit {
    pub fn total(&self) -> usize {
        self.automatable.len() + self.human_required.len()
    }
}

/// One occupation as stored in the catalog snapshot.
///
/// `key` is not part of the record body on disk; the snapshot is an object
/// keyed by it, and the catalog fills it in on load.
///
/// `skill_vector` is an embedding used only for similarity ranking. It is not
/// positionally aligned with `skills`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupationRecord {
    #[serde(skip)]
    pub key: String,
    pub title: String,
    pub risk_score: f64, // 0 – 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onet_code: Option<String>,
    pub tasks: TaskSplit,
    pub skills: Vec<String>,
    pub tech_threats: Vec<String>,
    pub skill_vector: Vec<f64>,
}
