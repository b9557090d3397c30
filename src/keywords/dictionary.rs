// Keyword dictionary - the fixed set of portfolio keywords and their aliases
//
// Built once at startup and immutable afterwards. Entry order matters: the
// resolver's tie-break scans canonical names and aliases in definition order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A canonical keyword plus its informal aliases (misspellings, abbreviations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeywordEntry {
    /// The primary, user-facing name of the topic
    pub canonical: String,
    /// Alternate spellings mapped to the canonical name, in listed order
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl KeywordEntry {
    pub fn new(canonical: &str, aliases: &[&str]) -> Self {
        Self {
            canonical: canonical.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Error types for dictionary construction and loading
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DictionaryError {
    /// Canonical keyword name is empty
    #[error("Keyword name cannot be empty")]
    EmptyKeyword,
    /// Canonical keyword name already present (case-insensitive)
    #[error("Duplicate keyword '{0}'")]
    DuplicateKeyword(String),
    /// Failed to load a dictionary file
    #[error("Failed to load dictionary: {0}")]
    LoadError(String),
}

/// Ordered, immutable collection of keyword entries
#[derive(Debug, Clone)]
pub struct KeywordDictionary {
    entries: Vec<KeywordEntry>,
}

impl KeywordDictionary {
    /// Build a dictionary from entries, validating them.
    ///
    /// Canonical names must be non-empty and unique case-insensitively.
    /// Aliases may repeat across entries; scan order decides which entry
    /// claims a shared alias.
    pub fn from_entries(entries: Vec<KeywordEntry>) -> Result<Self, DictionaryError> {
        let mut seen: HashSet<String> = HashSet::new();
        for entry in &entries {
            if entry.canonical.trim().is_empty() {
                return Err(DictionaryError::EmptyKeyword);
            }
            if !seen.insert(entry.canonical.trim().to_lowercase()) {
                return Err(DictionaryError::DuplicateKeyword(entry.canonical.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Load a dictionary from a JSON file (an array of entries).
    ///
    /// Unlike an optional settings file, a dictionary path is always
    /// caller-supplied, so a missing file is an error rather than an
    /// empty dictionary.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        crate::debug!("Loading keyword dictionary from {:?}", path);

        let content = fs::read_to_string(path)
            .map_err(|e| DictionaryError::LoadError(e.to_string()))?;

        let entries: Vec<KeywordEntry> = serde_json::from_str(&content)
            .map_err(|e| DictionaryError::LoadError(e.to_string()))?;

        let dictionary = Self::from_entries(entries)?;
        crate::info!("Loaded {} keywords from {:?}", dictionary.len(), path);
        Ok(dictionary)
    }

    /// The built-in portfolio dictionary, in page-definition order.
    pub fn builtin() -> Self {
        // Known-valid, so no validation round trip
        Self {
            entries: vec![
                KeywordEntry::new(
                    "Experiance",
                    &["xp", "exp", "exparaince", "iance", "xperaince"],
                ),
                KeywordEntry::new(
                    "Expertise",
                    &["expert", "exp", "experties", "experts", "expertiese"],
                ),
                KeywordEntry::new(
                    "Achievements",
                    &[
                        "achieve",
                        "achievements",
                        "achievments",
                        "achievemnts",
                        "achiev",
                        "achievment",
                    ],
                ),
                KeywordEntry::new(
                    "Education",
                    &["edu", "eduction", "educatoin", "educ", "edc", "edcucation"],
                ),
                KeywordEntry::new(
                    "Language",
                    &["lang", "langs", "language", "languge", "langauge", "lnguages"],
                ),
                KeywordEntry::new(
                    "Awards",
                    &[
                        "award",
                        "awards",
                        "awrd",
                        "awads",
                        "awad",
                        "activities",
                        "activity",
                    ],
                ),
            ],
        }
    }

    /// Entries in definition order
    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    /// Number of keyword entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "dictionary_test.rs"]
mod tests;
