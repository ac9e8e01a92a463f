use async_trait::async_trait;

use crate::domain::assistant::errors::AssistantError;

/// Minimum length for a usable code description, after trimming.
pub const MIN_DESCRIPTION_LENGTH: usize = 10;

pub struct GenerateCodeParams {
    pub description: String,
}

#[async_trait]
pub trait GenerateCodeUseCase: Send + Sync {
    async fn execute(&self, params: GenerateCodeParams) -> Result<String, AssistantError>;
}
