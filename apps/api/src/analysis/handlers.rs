//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::analysis::jitter::request_rng;
use crate::analysis::report::{analyze_occupation, AnalysisReport};
use crate::catalog::LookupError;
use crate::errors::AppError;
use crate::state::AppState;

/// Number of catalog titles offered in a not-found message.
const SUGGESTION_COUNT: usize = 5;

const DEFAULT_EXPERIENCE_YEARS: i64 = 5;
const DEFAULT_EDUCATION_LEVEL: &str = "bachelor";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub job_title: String,
    /// Accepted for client compatibility; not used in scoring. `null` and
    /// absent both mean the default.
    #[serde(default)]
    pub experience_years: Option<i64>,
    /// Accepted for client compatibility; not used in scoring.
    #[serde(default)]
    pub education_level: Option<String>,
}

impl AnalyzeRequest {
    pub fn experience_years(&self) -> i64 {
        self.experience_years.unwrap_or(DEFAULT_EXPERIENCE_YEARS)
    }

    pub fn education_level(&self) -> &str {
        self.education_level
            .as_deref()
            .unwrap_or(DEFAULT_EDUCATION_LEVEL)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JobsResponse {
    pub jobs: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Job Doom Calculator. Prepare for existential dread."
    }))
}

/// POST /analyze
///
/// Resolves the job title, then returns risk, safer pivots and the skill gap
/// to the top pivot. 404 with example titles when the title does not resolve.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }
    debug!(
        job_title = %request.job_title,
        experience_years = request.experience_years(),
        education_level = request.education_level(),
        "Analyze request"
    );

    let record = state
        .catalog
        .resolve(&request.job_title)
        .map_err(|e| not_found_with_suggestions(&state, e))?;

    let mut rng = request_rng(state.config.doom_seed);
    let report = analyze_occupation(&state.engine, record, &state.settings, &mut rng);

    info!(
        occupation = %record.key,
        safer_roles = report.safer_roles.len(),
        "Analyzed occupation"
    );
    Ok(Json(report))
}

/// GET /jobs
///
/// All catalog titles in catalog order.
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<JobsResponse> {
    Json(JobsResponse {
        jobs: state
            .catalog
            .titles()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

fn not_found_with_suggestions(state: &AppState, err: LookupError) -> AppError {
    let LookupError::NotFound(input) = err;
    let suggestions: Vec<&str> = state
        .catalog
        .titles()
        .into_iter()
        .take(SUGGESTION_COUNT)
        .collect();
    AppError::NotFound(format!(
        "Job '{input}' not found. Try: {}",
        suggestions.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> AnalyzeRequest {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_extras_default_when_absent() {
        let request = parse(r#"{"job_title": "Chef"}"#);
        assert_eq!(request.experience_years(), 5);
        assert_eq!(request.education_level(), "bachelor");
    }

    #[test]
    fn test_extras_default_when_null() {
        let request = parse(r#"{"job_title": "Chef", "experience_years": null, "education_level": null}"#);
        assert_eq!(request.experience_years(), 5);
        assert_eq!(request.education_level(), "bachelor");
    }

    #[test]
    fn test_extras_accept_any_integer() {
        let request = parse(r#"{"job_title": "Chef", "experience_years": -1, "education_level": "phd"}"#);
        assert_eq!(request.experience_years(), -1);
        assert_eq!(request.education_level(), "phd");
    }
}
