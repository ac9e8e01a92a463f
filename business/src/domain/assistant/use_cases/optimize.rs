use async_trait::async_trait;

use crate::domain::assistant::errors::AssistantError;

pub struct OptimizeCodeParams {
    pub code: String,
}

#[async_trait]
pub trait OptimizeCodeUseCase: Send + Sync {
    async fn execute(&self, params: OptimizeCodeParams) -> Result<String, AssistantError>;
}
