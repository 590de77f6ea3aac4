use std::io::Write;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::models::OccupationRecord;
use crate::catalog::resolver::normalize_key;
use crate::catalog::seed::seed_records;

/// Failures while building or persisting the catalog. All of them are fatal at
/// startup except a failed snapshot write after seeding.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog snapshot {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write catalog snapshot {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid occupation '{key}': {reason}")]
    InvalidRecord { key: String, reason: String },

    #[error("duplicate occupation key '{0}'")]
    DuplicateKey(String),
}

/// Lookup failure for `get` and `resolve`. Recoverable by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("occupation '{0}' not found")]
    NotFound(String),
}

/// Read-only, insertion-ordered occupation catalog.
///
/// Backed by an `IndexMap` so key lookup is O(1) and iteration order is the
/// order records were inserted (seed order, or document order of the snapshot).
#[derive(Debug, Clone)]
pub struct Catalog {
    records: IndexMap<String, OccupationRecord>,
}

impl Catalog {
    /// Loads the catalog from `path`, or seeds it and writes the snapshot when
    /// the file does not exist. A present but unreadable or malformed snapshot
    /// is an error; it is never replaced by the seed set.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        if path.exists() {
            let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let catalog = Self::from_snapshot_str(&raw).map_err(|e| match e {
                CatalogError::Serialize(source) => CatalogError::Malformed {
                    path: path.to_path_buf(),
                    source,
                },
                other => other,
            })?;
            info!(path = %path.display(), occupations = catalog.len(), "Loaded catalog snapshot");
            if catalog.is_empty() {
                warn!(path = %path.display(), "Catalog snapshot contains no occupations");
            }
            return Ok(catalog);
        }

        let catalog = Self::seeded()?;
        info!(
            path = %path.display(),
            occupations = catalog.len(),
            "No catalog snapshot found, using built-in seed set"
        );
        if let Err(e) = catalog.persist(path) {
            warn!("Catalog snapshot not persisted: {e}");
        }
        Ok(catalog)
    }

    /// Catalog built from the built-in seed set.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::from_records(seed_records())
    }

    /// Builds a catalog preserving the order of `records`. Records with an
    /// empty key get one derived from their title.
    pub fn from_records(records: Vec<OccupationRecord>) -> Result<Self, CatalogError> {
        let mut map = IndexMap::with_capacity(records.len());
        for mut record in records {
            if record.key.is_empty() {
                record.key = normalize_key(&record.title);
            }
            if map.contains_key(&record.key) {
                return Err(CatalogError::DuplicateKey(record.key));
            }
            map.insert(record.key.clone(), record);
        }
        let catalog = Catalog { records: map };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses snapshot JSON: an object of `key -> record`, in catalog order.
    pub fn from_snapshot_str(raw: &str) -> Result<Self, CatalogError> {
        let mut records: IndexMap<String, OccupationRecord> = serde_json::from_str(raw)?;
        for (key, record) in records.iter_mut() {
            record.key = key.clone();
        }
        let catalog = Catalog { records };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Serializes the catalog in snapshot form (2-space indented JSON).
    pub fn to_snapshot_string(&self) -> Result<String, CatalogError> {
        let mut out = serde_json::to_string_pretty(&self.records)?;
        out.push('\n');
        Ok(out)
    }

    /// Writes the snapshot, creating parent directories as needed.
    ///
    /// The body goes to a temp file in the same directory which is then renamed
    /// over `path`, so an interrupted write never leaves a truncated snapshot.
    pub fn persist(&self, path: &Path) -> Result<(), CatalogError> {
        let body = self.to_snapshot_string()?;
        let write_err = |source| CatalogError::Write {
            path: path.to_path_buf(),
            source,
        };
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(write_err)?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(body.as_bytes()).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(path).map_err(|e| write_err(e.error))?;
        info!(path = %path.display(), "Persisted catalog snapshot");
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<&OccupationRecord, LookupError> {
        self.records
            .get(key)
            .ok_or_else(|| LookupError::NotFound(key.to_string()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    /// All records in insertion order.
    pub fn all_records(&self) -> impl Iterator<Item = &OccupationRecord> {
        self.records.values()
    }

    /// All titles in insertion order.
    pub fn titles(&self) -> Vec<&str> {
        self.records.values().map(|r| r.title.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut dimension: Option<usize> = None;
        for (key, record) in &self.records {
            let invalid = |reason: String| CatalogError::InvalidRecord {
                key: key.clone(),
                reason,
            };
            if record.title.trim().is_empty() {
                return Err(invalid("title is empty".to_string()));
            }
            if !record.risk_score.is_finite() || !(0.0..=100.0).contains(&record.risk_score) {
                return Err(invalid(format!(
                    "risk_score {} is outside 0–100",
                    record.risk_score
                )));
            }
            if record.skill_vector.iter().any(|v| !v.is_finite()) {
                return Err(invalid("skill_vector has non-finite components".to_string()));
            }
            match dimension {
                None => dimension = Some(record.skill_vector.len()),
                Some(d) if d != record.skill_vector.len() => {
                    return Err(invalid(format!(
                        "skill_vector has {} components, expected {d}",
                        record.skill_vector.len()
                    )));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}
