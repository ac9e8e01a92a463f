use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::assistant::errors::AssistantError;
use crate::domain::assistant::model::AssistanceKind;
use crate::domain::assistant::prompt::build_prompt;
use crate::domain::assistant::services::CompletionService;
use crate::domain::assistant::use_cases::optimize::{OptimizeCodeParams, OptimizeCodeUseCase};
use crate::domain::logger::Logger;

pub struct OptimizeCodeUseCaseImpl {
    pub completion: Arc<dyn CompletionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl OptimizeCodeUseCase for OptimizeCodeUseCaseImpl {
    async fn execute(&self, params: OptimizeCodeParams) -> Result<String, AssistantError> {
        if params.code.trim().is_empty() {
            return Err(AssistantError::EmptySelection);
        }

        self.logger.info(&format!(
            "Looking for optimizations ({} chars)",
            params.code.len()
        ));

        let prompt = build_prompt(AssistanceKind::Optimize, &params.code);
        let suggestions = self.completion.complete(&prompt).await?;

        self.logger.info("Optimization suggestions generated");

        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::CompletionError;
    use mockall::mock;

    mock! {
        pub Completion {}

        #[async_trait]
        impl CompletionService for Completion {
            async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_suggestions_when_completion_succeeds() {
        let mut mock_completion = MockCompletion::new();
        mock_completion
            .expect_complete()
            .withf(|prompt| prompt.contains("for x in v.clone()"))
            .returning(|_| Ok("Iterate by reference instead of cloning.".to_string()));

        let use_case = OptimizeCodeUseCaseImpl {
            completion: Arc::new(mock_completion),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(OptimizeCodeParams {
                code: "for x in v.clone() { total += x; }".to_string(),
            })
            .await;

        assert_eq!(result.unwrap(), "Iterate by reference instead of cloning.");
    }

    #[tokio::test]
    async fn should_reject_empty_selection() {
        let mock_completion = MockCompletion::new();

        let use_case = OptimizeCodeUseCaseImpl {
            completion: Arc::new(mock_completion),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(OptimizeCodeParams {
                code: "\t ".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AssistantError::EmptySelection));
    }

    #[tokio::test]
    async fn should_propagate_completion_errors() {
        let mut mock_completion = MockCompletion::new();
        mock_completion
            .expect_complete()
            .returning(|_| Err(CompletionError::Http(500)));

        let use_case = OptimizeCodeUseCaseImpl {
            completion: Arc::new(mock_completion),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(OptimizeCodeParams {
                code: "let mut v = vec![];".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AssistantError::Completion(CompletionError::Http(500))
        ));
    }
}
