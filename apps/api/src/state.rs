use std::sync::Arc;

use crate::analysis::report::AnalysisSettings;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::matching::SimilarityEngine;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub engine: SimilarityEngine,
    pub config: Config,
    pub settings: AnalysisSettings,
}

impl AppState {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            engine: SimilarityEngine::new(Arc::clone(&catalog)),
            settings: AnalysisSettings::from(&config),
            catalog,
            config,
        }
    }
}
