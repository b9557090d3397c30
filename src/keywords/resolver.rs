// Keyword resolver - classifies free-text queries against the dictionary
//
// Exact matching first (canonical names and aliases, case-insensitive),
// then Levenshtein-based "did you mean" suggestions within a fixed
// edit-distance threshold.

use serde::Serialize;
use std::sync::OnceLock;
use strsim::levenshtein;

use super::dictionary::KeywordDictionary;

/// Maximum edit distance for a "did you mean" suggestion
pub const SUGGESTION_MAX_DISTANCE: usize = 2;

// Characters rejected before any matching runs. A reject filter against the
// query being echoed into rendered markup, not a general escaping step.
static BLOCKED_CHARS: OnceLock<regex::Regex> = OnceLock::new();

fn blocked_chars() -> &'static regex::Regex {
    BLOCKED_CHARS.get_or_init(|| {
        regex::Regex::new(r#"[<>{}\[\]();"'=]"#).expect("blocked-character class is valid")
    })
}

/// Outcome of resolving a query
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// Query equals a canonical keyword or one of its aliases
    Exact { keyword: String },
    /// No exact match, but a keyword within the suggestion threshold
    Suggestion { keyword: String, distance: usize },
    /// Nothing exact and nothing close enough
    NotFound,
    /// Query contained a blocked character
    InvalidInput,
    /// Query was empty after trimming
    Empty,
}

/// Resolver over an immutable keyword dictionary
#[derive(Debug)]
pub struct KeywordResolver {
    dictionary: KeywordDictionary,
}

impl KeywordResolver {
    pub fn new(dictionary: KeywordDictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &KeywordDictionary {
        &self.dictionary
    }

    /// Normalize input text: lowercase and trim whitespace
    fn normalize(input: &str) -> String {
        input.trim().to_lowercase()
    }

    /// Classify a raw query.
    ///
    /// The sanitation gate runs before any matching; an empty query is its
    /// own outcome so callers can clear a previously shown result.
    pub fn resolve(&self, raw: &str) -> Resolution {
        if blocked_chars().is_match(raw) {
            crate::debug!("Rejected query containing blocked character");
            return Resolution::InvalidInput;
        }

        let query = Self::normalize(raw);
        if query.is_empty() {
            return Resolution::Empty;
        }

        if let Some(keyword) = self.resolve_exact(&query) {
            return Resolution::Exact {
                keyword: keyword.to_string(),
            };
        }

        match self.resolve_fuzzy(&query) {
            Some((keyword, distance)) => Resolution::Suggestion {
                keyword: keyword.to_string(),
                distance,
            },
            None => Resolution::NotFound,
        }
    }

    /// Find the canonical keyword the query names verbatim, if any.
    ///
    /// Compares the normalized query against every canonical name and alias,
    /// normalized the same way; the first hit in definition order wins (an
    /// alias shared between entries belongs to the earlier one).
    pub fn resolve_exact(&self, query: &str) -> Option<&str> {
        let query = Self::normalize(query);
        for entry in self.dictionary.entries() {
            if Self::normalize(&entry.canonical) == query {
                return Some(&entry.canonical);
            }
            if entry
                .aliases
                .iter()
                .any(|alias| Self::normalize(alias) == query)
            {
                return Some(&entry.canonical);
            }
        }
        None
    }

    /// Find the closest keyword within the suggestion threshold, if any.
    ///
    /// Linear scan over canonical names and aliases in definition order,
    /// keeping the strict minimum, so the first minimum encountered wins
    /// ties. Returns the canonical keyword and the winning distance.
    pub fn resolve_fuzzy(&self, query: &str) -> Option<(&str, usize)> {
        let query = Self::normalize(query);
        if query.is_empty() {
            return None;
        }

        let mut best: Option<(&str, usize)> = None;
        for entry in self.dictionary.entries() {
            let candidates =
                std::iter::once(&entry.canonical).chain(entry.aliases.iter());
            for candidate in candidates {
                let distance = levenshtein(&query, &Self::normalize(candidate));
                if best.map_or(true, |(_, d)| distance < d) {
                    best = Some((entry.canonical.as_str(), distance));
                }
            }
        }

        best.filter(|&(_, distance)| distance <= SUGGESTION_MAX_DISTANCE)
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
