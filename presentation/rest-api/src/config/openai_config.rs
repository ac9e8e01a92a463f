use std::env;

/// Configuration for OpenAI API access.
///
/// Environment variables:
/// - OPENAI_API_KEY: Bearer token for the completion endpoint. May be unset;
///   requests then fail with a missing-key error instead of crashing startup.
/// - OPENAI_MODEL: Chat model identifier (default: "gpt-3.5-turbo")
pub struct OpenAIConfig {
    pub api_key: String,
    pub model: String,
}

impl OpenAIConfig {
    pub fn from_env() -> Self {
        let api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());

        Self { api_key, model }
    }
}
