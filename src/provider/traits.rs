// Topic provider trait — the swap-ready abstraction.
//
// Both upstream backends implement this. The rest of the pipeline only
// ever sees `Arc<dyn TopicProvider>`, so backends can be added or
// retired without touching the HTTP boundary.

use async_trait::async_trait;

use crate::error::ExtractError;

/// Trait for extracting topics from a transcript via an upstream LLM.
/// Implementations must be async because every provider is an HTTP API.
#[async_trait]
pub trait TopicProvider: Send + Sync {
    /// Extract the main topics from a transcript.
    ///
    /// On success the returned list is non-empty and in the order the
    /// upstream produced it. Exactly one upstream call is made; failures
    /// are classified, never retried.
    async fn extract_topics(&self, transcript: &str) -> Result<Vec<String>, ExtractError>;

    /// Short backend name for logging.
    fn name(&self) -> &'static str;
}
