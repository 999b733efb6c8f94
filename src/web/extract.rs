// POST /extract-topics — run the extraction pipeline.
//
// Body: {"transcript": "..."}. Returns 200 {"topics": [...]} or the
// classified error envelope. The raw body is taken as Bytes rather than
// a typed extractor so that malformed JSON produces our own 400 message
// instead of Axum's rejection text.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tracing::info;

use crate::error::ExtractError;
use crate::provider::TopicProvider;
use crate::request;
use crate::web::AppState;

/// POST /extract-topics — extract 5-7 topics from a transcript.
pub async fn extract_topics(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ExtractError> {
    // Admission gate: no upstream call for degenerate input
    let transcript = request::parse_transcript(&body)?;

    let topics = state.provider.extract_topics(&transcript).await?;

    info!(
        provider = state.provider.name(),
        count = topics.len(),
        "Extracted topics"
    );

    Ok(Json(serde_json::json!({ "topics": topics })))
}
