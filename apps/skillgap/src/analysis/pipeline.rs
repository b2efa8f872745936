//! One analysis run: resume → skills → gap & recommendations → job listings.
//!
//! Steps run strictly in order. Only extraction can fail; an unknown (or
//! empty) role gives an empty gap and job lookup degrades to an empty list.

use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::analysis::gap::compute_missing_skills;
use crate::analysis::recommend::recommend_roles;
use crate::catalog::SkillCatalog;
use crate::errors::AppError;
use crate::extraction::document::TextExtractor;
use crate::extraction::normalize::ResumeText;
use crate::models::analysis::AnalysisReport;
use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub resume_path: PathBuf,
    pub target_role: String,
    pub fetch_jobs: bool,
}

/// Gap and ranking for an already-extracted skill set. No I/O.
pub fn build_report(
    user_skills: BTreeSet<String>,
    target_role: &str,
    catalog: &SkillCatalog,
) -> AnalysisReport {
    let role_known = catalog.contains_role(target_role);
    let required_skills = catalog.required_skills(target_role).clone();
    let missing_skills = compute_missing_skills(&user_skills, target_role, catalog);
    let recommendations = recommend_roles(&user_skills, catalog);

    AnalysisReport {
        target_role: target_role.to_string(),
        role_known,
        extracted_skills: user_skills,
        required_skills,
        missing_skills,
        recommendations,
        job_listings: None,
    }
}

pub async fn run_analysis(
    state: &AppState,
    extractor: &dyn TextExtractor,
    request: &AnalysisRequest,
) -> Result<AnalysisReport, AppError> {
    let raw_text = extractor.extract(&request.resume_path).await?;
    if raw_text.trim().is_empty() {
        warn!(
            "No text could be extracted from {}; skill set will be empty",
            request.resume_path.display()
        );
    }

    let text = ResumeText::new(&raw_text);
    let user_skills = state.recognizer.recognize(&text);
    info!("Recognized {} skills in resume", user_skills.len());

    let mut report = build_report(user_skills, &request.target_role, &state.catalog);
    if !report.role_known {
        info!(
            "Target role '{}' is not in the catalog",
            request.target_role
        );
    }

    if request.fetch_jobs {
        report.job_listings = Some(state.jobs.fetch_jobs(&request.target_role).await);
    }

    Ok(report)
}
