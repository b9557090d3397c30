// Tests for dictionary construction and loading

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_builtin_dictionary_contents() {
    let dictionary = KeywordDictionary::builtin();
    assert_eq!(dictionary.len(), 6);
    assert!(!dictionary.is_empty());

    let canonicals: Vec<&str> = dictionary
        .entries()
        .iter()
        .map(|e| e.canonical.as_str())
        .collect();
    assert_eq!(
        canonicals,
        vec![
            "Experiance",
            "Expertise",
            "Achievements",
            "Education",
            "Language",
            "Awards"
        ]
    );

    let education = &dictionary.entries()[3];
    assert!(education.aliases.contains(&"edcucation".to_string()));
}

#[test]
fn test_duplicate_keyword_rejected_case_insensitively() {
    let entries = vec![
        KeywordEntry::new("Education", &["edu"]),
        KeywordEntry::new("EDUCATION", &[]),
    ];

    let result = KeywordDictionary::from_entries(entries);
    assert_eq!(
        result.unwrap_err(),
        DictionaryError::DuplicateKeyword("EDUCATION".to_string())
    );
}

#[test]
fn test_empty_keyword_rejected() {
    let entries = vec![KeywordEntry::new("   ", &["blank"])];

    let result = KeywordDictionary::from_entries(entries);
    assert_eq!(result.unwrap_err(), DictionaryError::EmptyKeyword);
}

#[test]
fn test_shared_aliases_allowed() {
    // "exp" aliases two entries, as in the built-in dictionary
    let entries = vec![
        KeywordEntry::new("Experiance", &["exp"]),
        KeywordEntry::new("Expertise", &["exp"]),
    ];

    assert!(KeywordDictionary::from_entries(entries).is_ok());
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(
        file,
        r#"[
            {{"canonical": "Projects", "aliases": ["proj", "projcts"]}},
            {{"canonical": "Contact"}}
        ]"#
    )
    .expect("Failed to write temp file");

    let dictionary = KeywordDictionary::load(file.path()).expect("Load should succeed");
    assert_eq!(dictionary.len(), 2);
    assert_eq!(dictionary.entries()[0].canonical, "Projects");
    assert_eq!(dictionary.entries()[0].aliases, vec!["proj", "projcts"]);
    // Missing aliases field defaults to empty
    assert!(dictionary.entries()[1].aliases.is_empty());
}

#[test]
fn test_load_missing_file_is_error() {
    let result = KeywordDictionary::load(std::path::Path::new("/nonexistent/dictionary.json"));
    assert!(matches!(result, Err(DictionaryError::LoadError(_))));
}

#[test]
fn test_load_malformed_json_is_error() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "not json").expect("Failed to write temp file");

    let result = KeywordDictionary::load(file.path());
    assert!(matches!(result, Err(DictionaryError::LoadError(_))));
}

#[test]
fn test_load_validates_entries() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(
        file,
        r#"[
            {{"canonical": "Projects"}},
            {{"canonical": "projects"}}
        ]"#
    )
    .expect("Failed to write temp file");

    let result = KeywordDictionary::load(file.path());
    assert_eq!(
        result.unwrap_err(),
        DictionaryError::DuplicateKeyword("projects".to_string())
    );
}
