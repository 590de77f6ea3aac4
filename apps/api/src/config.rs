use std::path::PathBuf;

use anyhow::{bail, Context, Result};

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:8501,http://127.0.0.1:8501";

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// CORS allow-list for the presentation layer.
    pub allowed_origins: Vec<String>,
    /// Root directory holding `processed/jobs_normalized.json`.
    pub data_dir: PathBuf,
    pub safer_roles_top_k: usize,
    pub jitter_min: f64,
    pub jitter_max: f64,
    /// Fixed seed for the per-request generator. Unset means OS entropy.
    pub doom_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            port: parse_env("PORT", 8000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            allowed_origins: parse_origins(
                &std::env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            safer_roles_top_k: parse_env("SAFER_ROLES_TOP_K", 3)?,
            jitter_min: parse_env("JITTER_MIN", -5.0)?,
            jitter_max: parse_env("JITTER_MAX", 10.0)?,
            doom_seed: std::env::var("DOOM_SEED")
                .ok()
                .map(|s| s.parse::<u64>())
                .transpose()
                .context("DOOM_SEED must be an unsigned integer")?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Location of the persisted catalog snapshot.
    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join("processed").join("jobs_normalized.json")
    }

    fn validate(&self) -> Result<()> {
        if !self.jitter_min.is_finite() || !self.jitter_max.is_finite() {
            bail!("JITTER_MIN and JITTER_MAX must be finite numbers");
        }
        if self.jitter_min > self.jitter_max {
            bail!(
                "JITTER_MIN ({}) must not exceed JITTER_MAX ({})",
                self.jitter_min,
                self.jitter_max
            );
        }
        if self.allowed_origins.is_empty() {
            bail!("ALLOWED_ORIGINS must list at least one origin");
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            rust_log: "info".to_string(),
            allowed_origins: parse_origins(DEFAULT_ALLOWED_ORIGINS),
            data_dir: PathBuf::from("data"),
            safer_roles_top_k: 3,
            jitter_min: -5.0,
            jitter_max: 10.0,
            doom_seed: None,
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| anyhow::anyhow!("{key} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
