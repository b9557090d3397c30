// Keywords module - dictionary of portfolio keywords and the query resolver

pub mod dictionary;
pub mod resolver;

pub use dictionary::{DictionaryError, KeywordDictionary, KeywordEntry};
pub use resolver::{KeywordResolver, Resolution, SUGGESTION_MAX_DISTANCE};
