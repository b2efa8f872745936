use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::job::JobListing;

/// One catalog role scored against the user's skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleMatch {
    pub role: String,
    /// 0.0 – 100.0
    pub percentage: f64,
}

/// Everything the reporter prints for one run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub target_role: String,
    /// False when the target role is absent from the catalog. The gap is
    /// then empty, which on its own looks the same as a perfect match.
    pub role_known: bool,
    pub extracted_skills: BTreeSet<String>,
    pub required_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
    /// Every catalog role, best first. Text output hides non-positive matches.
    pub recommendations: Vec<RoleMatch>,
    /// `None` when the lookup was skipped.
    pub job_listings: Option<Vec<JobListing>>,
}
