// Keyword lookup core for the portfolio ask box.
//
// The page's presentation layer (3D viewer, tab panels, typewriter effect)
// lives elsewhere; this crate only classifies free-text queries against the
// keyword dictionary and describes the outcomes the page reacts to.

pub mod events;
pub mod keywords;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use keywords::{
    DictionaryError, KeywordDictionary, KeywordEntry, KeywordResolver, Resolution,
    SUGGESTION_MAX_DISTANCE,
};
