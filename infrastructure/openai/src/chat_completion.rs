use async_trait::async_trait;
use serde_json::json;

use business::domain::assistant::services::CompletionService;
use business::domain::errors::CompletionError;

use crate::client::OpenAIClient;

/// Token cap for a single reply.
const MAX_TOKENS: u32 = 1000;
const TEMPERATURE: f64 = 0.7;

/// Chat-completion adapter over the OpenAI API.
///
/// One buffered request per call: the reply is awaited whole, never streamed,
/// and a failed call is never retried.
pub struct ChatCompletionOpenAI {
    client: OpenAIClient,
}

impl ChatCompletionOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn classify_status(status: u16) -> CompletionError {
        match status {
            401 => CompletionError::Unauthorized,
            429 => CompletionError::RateLimited,
            other => CompletionError::Http(other),
        }
    }

    fn extract_reply(data: &serde_json::Value) -> Result<String, CompletionError> {
        data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .map(|content| content.to_string())
            .ok_or(CompletionError::MalformedResponse)
    }
}

#[async_trait]
impl CompletionService for ChatCompletionOpenAI {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        if self.client.api_key.trim().is_empty() {
            return Err(CompletionError::MissingApiKey);
        }

        let body = json!({
            "model": self.client.model,
            "messages": [
                {"role": "user", "content": prompt},
            ],
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
        });

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|err| CompletionError::Network(err.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::classify_status(response.status().as_u16()));
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| CompletionError::MalformedResponse)?;

        Self::extract_reply(&data)
    }
}
