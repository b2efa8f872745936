//! Skill gap: which of a role's required skills the user does not have.

use std::collections::BTreeSet;

use crate::catalog::SkillCatalog;

/// Returns `required(role) − user_skills`.
///
/// An unknown role has no required skills, so the result is empty. This is
/// indistinguishable from "no gap"; use `SkillCatalog::contains_role` when
/// the difference matters.
pub fn compute_missing_skills(
    user_skills: &BTreeSet<String>,
    role: &str,
    catalog: &SkillCatalog,
) -> BTreeSet<String> {
    catalog
        .required_skills(role)
        .difference(user_skills)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_catalog() -> SkillCatalog {
        SkillCatalog::from_map([
            ("data_scientist", vec!["python", "sql", "statistics"]),
            ("web_developer", vec!["javascript", "html", "css", "git"]),
            ("devops_engineer", vec!["docker", "kubernetes", "git", "linux"]),
            ("intern", vec![]),
        ])
    }

    #[test]
    fn test_missing_skills_for_data_scientist() {
        let catalog = sample_catalog();
        let missing =
            compute_missing_skills(&skills(&["python", "sql"]), "data_scientist", &catalog);
        assert_eq!(missing, skills(&["statistics"]));
    }

    #[test]
    fn test_exact_match_has_no_gap() {
        let catalog = sample_catalog();
        let user = skills(&["python", "sql", "statistics"]);
        assert!(compute_missing_skills(&user, "data_scientist", &catalog).is_empty());
    }

    #[test]
    fn test_extra_user_skills_do_not_matter() {
        let catalog = sample_catalog();
        let user = skills(&["python", "sql", "statistics", "rust", "docker"]);
        assert!(compute_missing_skills(&user, "data_scientist", &catalog).is_empty());
    }

    #[test]
    fn test_unknown_role_yields_empty_gap() {
        let catalog = sample_catalog();
        assert!(compute_missing_skills(&skills(&[]), "astronaut", &catalog).is_empty());
    }

    #[test]
    fn test_no_user_skills_misses_everything() {
        let catalog = sample_catalog();
        let missing = compute_missing_skills(&BTreeSet::new(), "web_developer", &catalog);
        assert_eq!(missing, *catalog.required_skills("web_developer"));
    }

    #[test]
    fn test_missing_is_subset_of_required_and_disjoint_from_user() {
        let catalog = sample_catalog();
        let users = [
            skills(&[]),
            skills(&["git"]),
            skills(&["python", "docker", "css"]),
            skills(&["linux", "kubernetes", "docker", "git", "html"]),
        ];
        for user in &users {
            for (role, required) in catalog.iter() {
                let missing = compute_missing_skills(user, role, &catalog);
                assert!(missing.is_subset(required), "role {role}");
                assert!(missing.is_disjoint(user), "role {role}");
            }
        }
    }
}
