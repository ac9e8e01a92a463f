use async_trait::async_trait;

use crate::domain::assistant::errors::AssistantError;

pub struct ExplainCodeParams {
    pub code: String,
}

#[async_trait]
pub trait ExplainCodeUseCase: Send + Sync {
    async fn execute(&self, params: ExplainCodeParams) -> Result<String, AssistantError>;
}
