//! Skill recognition: turns resume text into a set of skill names.
//!
//! `SkillRecognizer` is the seam: anything that can name skills in text
//! (a gazetteer, an NER model behind a service) plugs in here.
//! Default: `GazetteerRecognizer`, a whole-word phrase matcher over the
//! catalog vocabulary.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use anyhow::Context;
use regex::Regex;
use tracing::{debug, warn};

use crate::catalog::SkillCatalog;
use crate::errors::AppError;
use crate::extraction::normalize::{normalize_text, tokens, ResumeText};

/// Recognizes skills in resume text. Returned names are lower-case.
pub trait SkillRecognizer: Send + Sync {
    fn recognize(&self, text: &ResumeText) -> BTreeSet<String>;
}

/// A plain-word vocabulary phrase, pre-split into normalized tokens.
#[derive(Debug, Clone)]
struct Phrase {
    tokens: Vec<String>,
    skill: String,
}

/// A vocabulary phrase with punctuation or digits (`c++`, `node.js`, `s3`).
/// Normalizing would erase what tells it apart from other skills, so it is
/// matched against the lower-cased text instead.
#[derive(Debug, Clone)]
struct SymbolPhrase {
    pattern: Regex,
    skill: String,
}

/// Matches known skill phrases as whole words and reports them under their
/// vocabulary spelling, so results compare directly against catalog sets.
///
/// Plain-word phrases are indexed by their first normalized token. Phrases
/// containing symbols are matched literally, bounded by non-word characters
/// or the ends of the text: `c++` does not fire on a bare `C`, and `node.js`
/// does not fire on `node.jsx`.
#[derive(Debug, Clone, Default)]
pub struct GazetteerRecognizer {
    by_first_token: HashMap<String, Vec<Phrase>>,
    symbol_phrases: Vec<SymbolPhrase>,
    size: usize,
}

fn is_plain_word(skill: &str) -> bool {
    skill
        .chars()
        .all(|c| c.is_alphabetic() || c == '_' || c.is_whitespace())
}

fn symbol_pattern(skill: &str) -> Result<Regex, regex::Error> {
    let body = skill
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    Regex::new(&format!(r"(?:^|\W){body}(?:$|\W)"))
}

impl GazetteerRecognizer {
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut recognizer = Self::default();
        for skill in vocabulary {
            recognizer.insert(skill.as_ref());
        }
        recognizer
    }

    /// Catalog vocabulary plus any extra skills.
    pub fn from_catalog(catalog: &SkillCatalog, extra: &[String]) -> Self {
        let mut recognizer = Self::new(catalog.vocabulary());
        for skill in extra {
            recognizer.insert(skill);
        }
        debug!("Skill gazetteer holds {} phrases", recognizer.len());
        recognizer
    }

    fn insert(&mut self, skill: &str) {
        let skill = skill.trim().to_lowercase();
        let normalized = normalize_text(&skill);
        let phrase_tokens: Vec<String> = tokens(&normalized).map(String::from).collect();
        let Some(first) = phrase_tokens.first().cloned() else {
            return;
        };

        if !is_plain_word(&skill) {
            if self.symbol_phrases.iter().any(|p| p.skill == skill) {
                return;
            }
            match symbol_pattern(&skill) {
                Ok(pattern) => {
                    self.symbol_phrases.push(SymbolPhrase { pattern, skill });
                    self.size += 1;
                }
                Err(e) => warn!("Skipping skill '{skill}': {e}"),
            }
            return;
        }

        let bucket = self.by_first_token.entry(first).or_default();
        if bucket.iter().any(|p| p.skill == skill) {
            return;
        }
        bucket.push(Phrase {
            tokens: phrase_tokens,
            skill,
        });
        self.size += 1;
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.size
    }
}

impl SkillRecognizer for GazetteerRecognizer {
    fn recognize(&self, text: &ResumeText) -> BTreeSet<String> {
        let text_tokens: Vec<&str> = tokens(&text.normalized).collect();
        let mut found = BTreeSet::new();

        for (i, token) in text_tokens.iter().enumerate() {
            let Some(candidates) = self.by_first_token.get(*token) else {
                continue;
            };
            for phrase in candidates {
                let end = i + phrase.tokens.len();
                if end <= text_tokens.len()
                    && phrase
                        .tokens
                        .iter()
                        .zip(&text_tokens[i..end])
                        .all(|(a, b)| a == b)
                {
                    found.insert(phrase.skill.clone());
                }
            }
        }

        for phrase in &self.symbol_phrases {
            if phrase.pattern.is_match(&text.lowered) {
                found.insert(phrase.skill.clone());
            }
        }

        found
    }
}

/// Loads an extra skill vocabulary: a JSON array of strings.
pub fn load_vocabulary(path: &Path) -> Result<Vec<String>, AppError> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read skill vocabulary '{}'", path.display()))?;
    let skills: Vec<String> = serde_json::from_str(&raw)
        .with_context(|| format!("Skill vocabulary '{}' must be a JSON array of strings", path.display()))?;
    Ok(skills)
}
