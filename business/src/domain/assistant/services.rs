use async_trait::async_trait;

use crate::domain::errors::CompletionError;

/// Service port for requesting a single chat completion from a language model.
///
/// One request per invocation; implementations hold no cross-call state and
/// never retry.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}
