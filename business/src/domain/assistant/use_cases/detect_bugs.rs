use async_trait::async_trait;

use crate::domain::assistant::errors::AssistantError;

pub struct DetectBugsParams {
    pub code: String,
}

#[async_trait]
pub trait DetectBugsUseCase: Send + Sync {
    async fn execute(&self, params: DetectBugsParams) -> Result<String, AssistantError>;
}
