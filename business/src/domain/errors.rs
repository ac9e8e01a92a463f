/// Completion port errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion.missing_api_key")]
    MissingApiKey,
    #[error("completion.unauthorized")]
    Unauthorized,
    #[error("completion.rate_limited")]
    RateLimited,
    #[error("completion.http_error.{0}")]
    Http(u16),
    #[error("completion.malformed_response")]
    MalformedResponse,
    #[error("completion.network_error: {0}")]
    Network(String),
}
