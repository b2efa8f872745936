use std::sync::Arc;

use tracing::info;

use crate::catalog::SkillCatalog;
use crate::config::Config;
use crate::errors::AppError;
use crate::extraction::skills::{load_vocabulary, GazetteerRecognizer, SkillRecognizer};
use crate::jobs::{AdzunaClient, JobLookup};

/// Everything one analysis run needs, built once at startup and passed down.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Loaded before anything else; never mutated.
    pub catalog: Arc<SkillCatalog>,
    /// Pluggable skill recognizer. Default: GazetteerRecognizer over the catalog vocabulary.
    pub recognizer: Arc<dyn SkillRecognizer>,
    /// Pluggable job lookup. Default: AdzunaClient.
    pub jobs: Arc<dyn JobLookup>,
}

impl AppState {
    /// Production wiring. Fails with a config error when the catalog cannot be
    /// loaded or is empty.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let catalog = SkillCatalog::load(&config.role_skills_file)?;

        let extra = match &config.skill_vocabulary_file {
            Some(path) => load_vocabulary(path)?,
            None => Vec::new(),
        };
        let recognizer = GazetteerRecognizer::from_catalog(&catalog, &extra);
        info!("Skill recognizer ready ({} phrases)", recognizer.len());

        let jobs = AdzunaClient::new(&config)?;

        Ok(Self {
            config,
            catalog: Arc::new(catalog),
            recognizer: Arc::new(recognizer),
            jobs: Arc::new(jobs),
        })
    }
}
