use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::assistant::errors::AssistantError;
use business::domain::errors::CompletionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AssistantError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            AssistantError::EmptySelection => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ValidationError",
                "Please select some code to work on.".to_string(),
            ),
            AssistantError::DescriptionTooShort => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ValidationError",
                "Please provide a more detailed description (at least 10 characters)."
                    .to_string(),
            ),
            AssistantError::Completion(err) => completion_response(err),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message,
            }),
        )
    }
}

/// One human-readable message per completion failure kind, surfaced verbatim.
fn completion_response(err: &CompletionError) -> (StatusCode, &'static str, String) {
    match err {
        CompletionError::MissingApiKey => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "ConfigurationError",
            "Please set your OpenAI API key.".to_string(),
        ),
        CompletionError::Unauthorized => (
            StatusCode::BAD_GATEWAY,
            "AuthenticationError",
            "Invalid API key. Please check your settings.".to_string(),
        ),
        CompletionError::RateLimited => (
            StatusCode::TOO_MANY_REQUESTS,
            "RateLimitError",
            "API rate limit exceeded. Please try again later.".to_string(),
        ),
        CompletionError::Http(status) => (
            StatusCode::BAD_GATEWAY,
            "CompletionError",
            format!("API request failed with status: {}", status),
        ),
        CompletionError::MalformedResponse => (
            StatusCode::BAD_GATEWAY,
            "CompletionError",
            "AI service returned an unexpected response.".to_string(),
        ),
        CompletionError::Network(message) => (
            StatusCode::BAD_GATEWAY,
            "CompletionError",
            format!("Failed to connect to AI service: {}", message),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_rate_limiting_to_429_with_its_message() {
        let err = AssistantError::Completion(CompletionError::RateLimited);

        let (status, json) = err.into_error_response();

        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            json.0.message,
            "API rate limit exceeded. Please try again later."
        );
    }

    #[test]
    fn should_map_bad_credentials_to_bad_gateway() {
        let err = AssistantError::Completion(CompletionError::Unauthorized);

        let (status, json) = err.into_error_response();

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json.0.message, "Invalid API key. Please check your settings.");
    }

    #[test]
    fn should_preserve_the_upstream_status_in_the_message() {
        let err = AssistantError::Completion(CompletionError::Http(503));

        let (_, json) = err.into_error_response();

        assert_eq!(json.0.message, "API request failed with status: 503");
    }

    #[test]
    fn should_map_validation_failures_to_422() {
        let (status, _) = AssistantError::DescriptionTooShort.into_error_response();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
