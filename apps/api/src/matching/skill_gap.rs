use std::collections::HashSet;

use crate::catalog::OccupationRecord;

/// Skills listed by `target` but not by `source`, compared by exact label.
///
/// Output follows `target.skills` order with duplicates dropped. Callers
/// should treat it as a set.
pub fn skill_gap(source: &OccupationRecord, target: &OccupationRecord) -> Vec<String> {
    let known: HashSet<&str> = source.skills.iter().map(String::as_str).collect();
    let mut seen: HashSet<&String> = HashSet::new();
    target
        .skills
        .iter()
        .filter(|skill| !known.contains(skill.as_str()))
        .filter(|skill| seen.insert(*skill))
        .cloned()
        .collect()
}
