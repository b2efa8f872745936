use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_ROLE_SKILLS_FILE: &str = "role_skills.json";
pub const DEFAULT_RESUME_PATH: &str = "test_data/resume.pdf";
pub const DEFAULT_ADZUNA_API_URL: &str = "https://api.adzuna.com/v1/api/jobs";
pub const DEFAULT_COUNTRY: &str = "in";
pub const DEFAULT_RESULTS_PER_PAGE: u32 = 5;

/// Application configuration loaded from environment variables.
/// Every field has a default; Adzuna credentials are optional and job lookup
/// is skipped without them.
#[derive(Debug, Clone)]
pub struct Config {
    pub role_skills_file: PathBuf,
    pub skill_vocabulary_file: Option<PathBuf>,
    pub resume_path: PathBuf,
    pub adzuna_app_id: Option<String>,
    pub adzuna_app_key: Option<String>,
    pub adzuna_api_url: String,
    pub jobs_country: String,
    pub jobs_results_per_page: u32,
    pub http_timeout: Duration,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            role_skills_file: PathBuf::from(DEFAULT_ROLE_SKILLS_FILE),
            skill_vocabulary_file: None,
            resume_path: PathBuf::from(DEFAULT_RESUME_PATH),
            adzuna_app_id: None,
            adzuna_app_key: None,
            adzuna_api_url: DEFAULT_ADZUNA_API_URL.to_string(),
            jobs_country: DEFAULT_COUNTRY.to_string(),
            jobs_results_per_page: DEFAULT_RESULTS_PER_PAGE,
            http_timeout: Duration::from_secs(30),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let jobs_results_per_page = match lookup("JOBS_RESULTS_PER_PAGE") {
            Some(v) => v
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .context("JOBS_RESULTS_PER_PAGE must be a positive integer")?,
            None => defaults.jobs_results_per_page,
        };

        let http_timeout = match lookup("HTTP_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(
                v.parse::<u64>()
                    .context("HTTP_TIMEOUT_SECS must be a number of seconds")?,
            ),
            None => defaults.http_timeout,
        };

        Ok(Config {
            role_skills_file: lookup("ROLE_SKILLS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.role_skills_file),
            skill_vocabulary_file: lookup("SKILL_VOCABULARY_FILE").map(PathBuf::from),
            resume_path: lookup("RESUME_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.resume_path),
            adzuna_app_id: lookup("ADZUNA_APP_ID").filter(|v| !v.is_empty()),
            adzuna_app_key: lookup("ADZUNA_APP_KEY").filter(|v| !v.is_empty()),
            adzuna_api_url: lookup("ADZUNA_API_URL").unwrap_or(defaults.adzuna_api_url),
            jobs_country: lookup("JOBS_COUNTRY").unwrap_or(defaults.jobs_country),
            jobs_results_per_page,
            http_timeout,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}
