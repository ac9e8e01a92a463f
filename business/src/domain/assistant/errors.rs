#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("assistant.empty_selection")]
    EmptySelection,
    #[error("assistant.description_too_short")]
    DescriptionTooShort,
    #[error("completion.failed")]
    Completion(#[from] crate::domain::errors::CompletionError),
}
