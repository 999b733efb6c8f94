// Response normalization — turning a provider's raw reply into the
// canonical ordered topic list.
//
// Two entry points, one per adapter path:
//   - tool-call arguments are schema-constrained by the provider, so the
//     only accepted shape is {"topics": [string, ...]};
//   - direct-completion text is held together by prompt discipline alone,
//     so it gets an ordered list of shape matchers that tolerate the
//     wrappings the model has been observed to produce.
//
// Element order is always preserved. No sorting, no deduplication, and
// no count enforcement — the prompt asks for 5-7 topics, but whatever
// non-zero count comes back passes through unmodified.

use serde_json::Value;
use tracing::warn;

use crate::error::ExtractError;

/// Normalize the JSON-encoded arguments of an `extract_topics` tool call.
///
/// Requires a `topics` field holding a non-empty array of strings; any
/// other shape is a malformed response.
pub fn topics_from_tool_arguments(raw: &str) -> Result<Vec<String>, ExtractError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| {
        warn!(error = %e, "Tool-call arguments are not valid JSON");
        ExtractError::MalformedResponse
    })?;

    let topics = topics_field(&value).ok_or_else(|| {
        warn!("Tool-call arguments lack a string-array 'topics' field");
        ExtractError::MalformedResponse
    })?;

    if topics.is_empty() {
        warn!("Tool call returned an empty topics array");
        return Err(ExtractError::MalformedResponse);
    }
    Ok(topics)
}

/// Normalize a direct-completion reply that should be a bare JSON array
/// of topic strings, but is not schema-guaranteed to be one.
///
/// Shape matchers are tried in order; first match wins. An empty
/// resolved list counts as no match.
pub fn topics_from_completion_text(raw: &str) -> Result<Vec<String>, ExtractError> {
    let value: Value = serde_json::from_str(raw.trim()).map_err(|e| {
        warn!(error = %e, "Completion text is not valid JSON");
        ExtractError::MalformedResponse
    })?;

    for matcher in COMPLETION_SHAPES {
        if let Some(topics) = matcher(&value) {
            if !topics.is_empty() {
                return Ok(topics);
            }
        }
    }

    warn!("Completion JSON matched none of the known topic shapes");
    Err(ExtractError::MalformedResponse)
}

/// The tolerated completion shapes, in priority order:
/// bare array, {"topics": [...]}, then an all-string-values object
/// (the model sometimes numbers its topics: {"0": ..., "1": ...}).
const COMPLETION_SHAPES: &[fn(&Value) -> Option<Vec<String>>] =
    &[bare_array, topics_field, string_values];

/// `["A: a", "B: b"]` — the shape the prompt actually asks for.
fn bare_array(value: &Value) -> Option<Vec<String>> {
    string_array(value)
}

/// `{"topics": ["A: a", ...]}` — the array wrapped in an object.
fn topics_field(value: &Value) -> Option<Vec<String>> {
    string_array(value.get("topics")?)
}

/// `{"0": "A: a", "1": "B: b"}` — an object whose every value is a
/// string; values are taken in enumeration order.
fn string_values(value: &Value) -> Option<Vec<String>> {
    let object = value.as_object()?;
    object
        .values()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}

/// An array whose every element is a string. A single non-string
/// element disqualifies the whole shape.
fn string_array(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}
