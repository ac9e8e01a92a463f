use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::assistant::errors::AssistantError;
use crate::domain::assistant::model::AssistanceKind;
use crate::domain::assistant::prompt::build_prompt;
use crate::domain::assistant::services::CompletionService;
use crate::domain::assistant::use_cases::explain::{ExplainCodeParams, ExplainCodeUseCase};
use crate::domain::logger::Logger;

pub struct ExplainCodeUseCaseImpl {
    pub completion: Arc<dyn CompletionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ExplainCodeUseCase for ExplainCodeUseCaseImpl {
    async fn execute(&self, params: ExplainCodeParams) -> Result<String, AssistantError> {
        if params.code.trim().is_empty() {
            return Err(AssistantError::EmptySelection);
        }

        self.logger.info(&format!(
            "Explaining code selection ({} chars)",
            params.code.len()
        ));

        let prompt = build_prompt(AssistanceKind::Explain, &params.code);
        let explanation = self.completion.complete(&prompt).await?;

        self.logger.info("Explanation generated");

        Ok(explanation)
    }
}
