use std::sync::Arc;

use logger::TracingLogger;

use openai::chat_completion::ChatCompletionOpenAI;
use openai::client::OpenAIClient;

use business::application::assistant::detect_bugs::DetectBugsUseCaseImpl;
use business::application::assistant::explain::ExplainCodeUseCaseImpl;
use business::application::assistant::generate_code::GenerateCodeUseCaseImpl;
use business::application::assistant::optimize::OptimizeCodeUseCaseImpl;

use crate::config::openai_config::OpenAIConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub assistant_api: crate::api::assistant::routes::AssistantApi,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let openai_config = OpenAIConfig::from_env();
        let openai_client = OpenAIClient::new(openai_config.api_key, openai_config.model);
        let completion = Arc::new(ChatCompletionOpenAI::new(openai_client));

        // Assistant use cases
        let explain_use_case = Arc::new(ExplainCodeUseCaseImpl {
            completion: completion.clone(),
            logger: logger.clone(),
        });
        let detect_bugs_use_case = Arc::new(DetectBugsUseCaseImpl {
            completion: completion.clone(),
            logger: logger.clone(),
        });
        let generate_code_use_case = Arc::new(GenerateCodeUseCaseImpl {
            completion: completion.clone(),
            logger: logger.clone(),
        });
        let optimize_use_case = Arc::new(OptimizeCodeUseCaseImpl {
            completion,
            logger,
        });

        let assistant_api = crate::api::assistant::routes::AssistantApi::new(
            explain_use_case,
            detect_bugs_use_case,
            generate_code_use_case,
            optimize_use_case,
        );

        Self {
            health_api,
            assistant_api,
        }
    }
}
