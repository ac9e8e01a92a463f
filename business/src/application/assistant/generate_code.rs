use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::assistant::errors::AssistantError;
use crate::domain::assistant::model::AssistanceKind;
use crate::domain::assistant::prompt::build_prompt;
use crate::domain::assistant::services::CompletionService;
use crate::domain::assistant::use_cases::generate_code::{
    GenerateCodeParams, GenerateCodeUseCase, MIN_DESCRIPTION_LENGTH,
};
use crate::domain::logger::Logger;

pub struct GenerateCodeUseCaseImpl {
    pub completion: Arc<dyn CompletionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateCodeUseCase for GenerateCodeUseCaseImpl {
    async fn execute(&self, params: GenerateCodeParams) -> Result<String, AssistantError> {
        if params.description.trim().len() < MIN_DESCRIPTION_LENGTH {
            return Err(AssistantError::DescriptionTooShort);
        }

        self.logger.info("Generating code from description");

        let prompt = build_prompt(AssistanceKind::GenerateCode, &params.description);
        let code = self.completion.complete(&prompt).await?;

        self.logger
            .info(&format!("Generated {} chars of code", code.len()));

        Ok(code)
    }
}
