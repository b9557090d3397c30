// Resolution events for the presentation layer
// Defines event names and payloads the page reacts to when a query resolves

use serde::Serialize;
use serde_json::{json, Value};

use crate::keywords::Resolution;

/// Event names as constants for consistency
pub mod keyword_events {
    /// Page reveals the content panel tagged with the keyword
    pub const KEYWORD_MATCHED: &str = "keyword_matched";
    /// Page renders a "did you mean" affordance for the keyword
    pub const KEYWORD_SUGGESTED: &str = "keyword_suggested";
    /// Page shows the generic not-found message
    pub const KEYWORD_NOT_FOUND: &str = "keyword_not_found";
    /// Page shows the generic invalid-input message
    pub const KEYWORD_INPUT_REJECTED: &str = "keyword_input_rejected";
    /// Page clears any previously shown result
    pub const KEYWORD_CLEARED: &str = "keyword_cleared";
}

/// Payload for keyword_matched
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMatchedPayload {
    pub keyword: String,
}

/// Payload for keyword_suggested
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSuggestedPayload {
    pub keyword: String,
    /// Edit distance between the query and the closest dictionary candidate
    pub distance: usize,
}

/// Event name for a resolution outcome
pub fn event_name(resolution: &Resolution) -> &'static str {
    match resolution {
        Resolution::Exact { .. } => keyword_events::KEYWORD_MATCHED,
        Resolution::Suggestion { .. } => keyword_events::KEYWORD_SUGGESTED,
        Resolution::NotFound => keyword_events::KEYWORD_NOT_FOUND,
        Resolution::InvalidInput => keyword_events::KEYWORD_INPUT_REJECTED,
        Resolution::Empty => keyword_events::KEYWORD_CLEARED,
    }
}

/// JSON payload for a resolution outcome, if the event carries one
pub fn event_payload(resolution: &Resolution) -> Option<Value> {
    match resolution {
        Resolution::Exact { keyword } => Some(json!(KeywordMatchedPayload {
            keyword: keyword.clone(),
        })),
        Resolution::Suggestion { keyword, distance } => Some(json!(KeywordSuggestedPayload {
            keyword: keyword.clone(),
            distance: *distance,
        })),
        Resolution::NotFound | Resolution::InvalidInput | Resolution::Empty => None,
    }
}

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;
