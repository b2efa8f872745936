use once_cell::sync::Lazy;
use regex::Regex;

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid digit regex"));
static NON_WORD_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\W+").expect("valid non-word regex"));

/// Lower-cases `text`, removes digits, and collapses each run of non-word
/// characters into a single space.
///
/// Digits go first so that `"a 1 b"` becomes `"a b"` in one pass; the result
/// is a fixed point of this function.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_digits = DIGITS.replace_all(&lowered, "");
    NON_WORD_RUNS.replace_all(&without_digits, " ").into_owned()
}

/// Resume text in the two forms skill matching needs: lower-cased with
/// punctuation intact, and fully normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeText {
    pub lowered: String,
    pub normalized: String,
}

impl ResumeText {
    pub fn new(raw: &str) -> Self {
        Self {
            lowered: raw.to_lowercase(),
            normalized: normalize_text(raw),
        }
    }
}

/// Splits normalized text into its word tokens.
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(' ').filter(|t| !t.is_empty())
}
