use reqwest::Client;

/// Shared OpenAI HTTP client configuration.
///
/// The key may be empty; adapters check it before every request so a
/// misconfigured deployment fails per call instead of at startup.
pub struct OpenAIClient {
    pub client: Client,
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl OpenAIClient {
    pub fn new(api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            model,
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_bearer_auth_header() {
        let client = OpenAIClient::new("sk-test".to_string(), "gpt-3.5-turbo".to_string());

        assert_eq!(client.auth_header(), "Bearer sk-test");
    }

    #[test]
    fn should_point_at_the_chat_completions_endpoint() {
        let client = OpenAIClient::new("sk-test".to_string(), "gpt-3.5-turbo".to_string());

        assert_eq!(
            client.chat_completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }
}
