// Request validation — the sole admission gate before any network call.
//
// Degenerate input (no body, no transcript, whitespace-only transcript)
// is rejected here so we never burn an upstream call on it.

use serde_json::Value;

use crate::error::ExtractError;

/// Parse an inbound request body and extract the transcript.
///
/// The body must be JSON with a `transcript` string field that is
/// non-empty after trimming. The transcript is returned untrimmed —
/// it gets embedded verbatim in the user prompt.
pub fn parse_transcript(body: &[u8]) -> Result<String, ExtractError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ExtractError::InvalidInput)?;

    let transcript = value
        .get("transcript")
        .and_then(Value::as_str)
        .ok_or(ExtractError::InvalidInput)?;

    if transcript.trim().is_empty() {
        return Err(ExtractError::InvalidInput);
    }

    Ok(transcript.to_string())
}
