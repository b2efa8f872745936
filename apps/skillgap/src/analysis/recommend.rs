//! Role recommendation: scores the user against every role in the catalog.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::catalog::SkillCatalog;
use crate::models::analysis::RoleMatch;

/// `100 × |user ∩ required| / |required|`, or 0.0 when `required` is empty.
pub fn match_percentage(user_skills: &BTreeSet<String>, required: &BTreeSet<String>) -> f64 {
    if required.is_empty() {
        return 0.0;
    }
    let matching = required.intersection(user_skills).count();
    (matching as f64 / required.len() as f64) * 100.0
}

/// Scores every catalog role, best match first.
///
/// Zero-percentage roles are included; filtering is the reporter's job.
/// Equal percentages are ordered by ascending role id.
pub fn recommend_roles(user_skills: &BTreeSet<String>, catalog: &SkillCatalog) -> Vec<RoleMatch> {
    let mut matches: Vec<RoleMatch> = catalog
        .iter()
        .map(|(role, required)| RoleMatch {
            role: role.clone(),
            percentage: match_percentage(user_skills, required),
        })
        .collect();

    matches.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.role.cmp(&b.role))
    });

    matches
}
