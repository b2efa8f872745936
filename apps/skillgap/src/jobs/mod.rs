/// Job Lookup: fetches live listings for a role from the Adzuna job-search API.
///
/// Lookup failures never escalate: any error is logged and the caller sees an
/// empty list. There are no retries.
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::AppError;
use crate::models::job::{JobListing, JobSearchResponse};

#[derive(Debug, Error)]
pub enum JobFetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Job search returned status {0}")]
    Status(u16),

    #[error("Job search response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("ADZUNA_APP_ID / ADZUNA_APP_KEY are not set")]
    MissingCredentials,
}

#[async_trait]
pub trait JobLookup: Send + Sync {
    /// Listings for `role`; empty on any failure.
    async fn fetch_jobs(&self, role: &str) -> Vec<JobListing>;
}

/// Catalog role ids use `_` for spaces; the search wants plain words.
pub fn role_query(role: &str) -> String {
    role.replace('_', " ")
}

#[derive(Clone)]
pub struct AdzunaClient {
    client: Client,
    base_url: String,
    app_id: Option<String>,
    app_key: Option<String>,
    country: String,
    results_per_page: u32,
}

impl AdzunaClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Ok(Self {
            client: build_http_client(config.http_timeout)?,
            base_url: config.adzuna_api_url.trim_end_matches('/').to_string(),
            app_id: config.adzuna_app_id.clone(),
            app_key: config.adzuna_app_key.clone(),
            country: config.jobs_country.clone(),
            results_per_page: config.jobs_results_per_page,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/{}/search/1", self.base_url, self.country)
    }

    /// Single request, surfacing every failure as a `JobFetchError`.
    pub async fn try_fetch_jobs(&self, role: &str) -> Result<Vec<JobListing>, JobFetchError> {
        let (Some(app_id), Some(app_key)) = (self.app_id.as_deref(), self.app_key.as_deref())
        else {
            return Err(JobFetchError::MissingCredentials);
        };

        let what = role_query(role);
        let results_per_page = self.results_per_page.to_string();
        debug!("GET {} what={what:?}", self.endpoint());

        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("app_id", app_id),
                ("app_key", app_key),
                ("results_per_page", results_per_page.as_str()),
                ("what", what.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(JobFetchError::Status(status.as_u16()));
        }

        let parsed = response
            .json::<JobSearchResponse>()
            .await
            .map_err(|e| {
                if e.is_decode() {
                    JobFetchError::Decode(e)
                } else {
                    JobFetchError::Http(e)
                }
            })?;
        Ok(parsed.results)
    }
}

#[async_trait]
impl JobLookup for AdzunaClient {
    async fn fetch_jobs(&self, role: &str) -> Vec<JobListing> {
        match self.try_fetch_jobs(role).await {
            Ok(jobs) => {
                info!("Fetched {} job listings for '{role}'", jobs.len());
                jobs
            }
            Err(e) => {
                warn!("Failed to fetch jobs from Adzuna: {e}");
                Vec::new()
            }
        }
    }
}

fn build_http_client(timeout: Duration) -> Result<Client, AppError> {
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")?;
    Ok(client)
}
