//! Skill Catalog: the static role → required-skills mapping.
//!
//! Loaded once at startup from a JSON object of `{ "role_id": ["skill", ...] }`
//! and passed by reference to everything that needs it. Never mutated.

use std::collections::{BTreeMap, BTreeSet};
use std::io::ErrorKind;
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::{debug, info};

use crate::errors::AppError;

static NO_SKILLS: Lazy<BTreeSet<String>> = Lazy::new(BTreeSet::new);

/// Immutable role → required skill set mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillCatalog {
    roles: BTreeMap<String, BTreeSet<String>>,
}

impl SkillCatalog {
    /// Loads and validates the catalog file.
    ///
    /// A catalog that parses but holds no roles is rejected with `ConfigEmpty`;
    /// the caller halts on it exactly as on a missing or malformed file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::ConfigMissing {
                path: path.to_path_buf(),
            },
            _ => AppError::Io(e),
        })?;

        let parsed: BTreeMap<String, Vec<String>> =
            serde_json::from_str(&raw).map_err(|source| AppError::ConfigMalformed {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog = Self::from_map(parsed);
        if catalog.is_empty() {
            return Err(AppError::ConfigEmpty {
                path: path.to_path_buf(),
            });
        }

        info!(
            "Loaded {} roles ({} distinct skills) from {}",
            catalog.len(),
            catalog.vocabulary().len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Builds a catalog from an in-memory mapping. Skill names are lower-cased
    /// and otherwise kept as written, empty strings included; duplicates
    /// collapse.
    pub fn from_map<I, R, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = (R, S)>,
        R: Into<String>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let roles = roles
            .into_iter()
            .map(|(role, skills)| {
                let role = role.into();
                let skills: BTreeSet<String> = skills
                    .into_iter()
                    .map(|s| s.as_ref().to_lowercase())
                    .collect();
                debug!("role '{role}' requires {} skills", skills.len());
                (role, skills)
            })
            .collect();
        Self { roles }
    }

    /// Required skills for `role`; empty for roles the catalog does not know.
    pub fn required_skills(&self, role: &str) -> &BTreeSet<String> {
        self.roles.get(role).unwrap_or(&NO_SKILLS)
    }

    pub fn contains_role(&self, role: &str) -> bool {
        self.roles.contains_key(role)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.roles.iter()
    }

    /// Union of every role's required skills.
    pub fn vocabulary(&self) -> BTreeSet<&str> {
        self.roles
            .values()
            .flat_map(|skills| skills.iter().map(String::as_str))
            .collect()
    }
}
