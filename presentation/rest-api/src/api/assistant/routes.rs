use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::assistant::errors::AssistantError;
use business::domain::assistant::use_cases::detect_bugs::{DetectBugsParams, DetectBugsUseCase};
use business::domain::assistant::use_cases::explain::{ExplainCodeParams, ExplainCodeUseCase};
use business::domain::assistant::use_cases::generate_code::{
    GenerateCodeParams, GenerateCodeUseCase,
};
use business::domain::assistant::use_cases::optimize::{OptimizeCodeParams, OptimizeCodeUseCase};

use crate::api::assistant::dto::{AssistantReply, CodeSelectionRequest, GenerateCodeRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AssistantApi {
    explain_use_case: Arc<dyn ExplainCodeUseCase>,
    detect_bugs_use_case: Arc<dyn DetectBugsUseCase>,
    generate_code_use_case: Arc<dyn GenerateCodeUseCase>,
    optimize_use_case: Arc<dyn OptimizeCodeUseCase>,
}

impl AssistantApi {
    pub fn new(
        explain_use_case: Arc<dyn ExplainCodeUseCase>,
        detect_bugs_use_case: Arc<dyn DetectBugsUseCase>,
        generate_code_use_case: Arc<dyn GenerateCodeUseCase>,
        optimize_use_case: Arc<dyn OptimizeCodeUseCase>,
    ) -> Self {
        Self {
            explain_use_case,
            detect_bugs_use_case,
            generate_code_use_case,
            optimize_use_case,
        }
    }
}

/// Assistant API
///
/// Endpoints forwarding code selections to the completion model. The reply is
/// returned whole; callers decide whether to display it or insert it into the
/// editor buffer.
#[OpenApi]
impl AssistantApi {
    /// Explain a code selection
    #[oai(path = "/assistant/explain", method = "post", tag = "ApiTags::Assistant")]
    async fn explain_code(&self, body: Json<CodeSelectionRequest>) -> AssistantResponse {
        let result = self
            .explain_use_case
            .execute(ExplainCodeParams { code: body.0.code })
            .await;

        into_response(result)
    }

    /// Scan a code selection for bugs
    ///
    /// Reports potential bugs, logical errors, security issues, performance
    /// problems, and style violations, each with a suggested fix.
    #[oai(path = "/assistant/bugs", method = "post", tag = "ApiTags::Assistant")]
    async fn detect_bugs(&self, body: Json<CodeSelectionRequest>) -> AssistantResponse {
        let result = self
            .detect_bugs_use_case
            .execute(DetectBugsParams { code: body.0.code })
            .await;

        into_response(result)
    }

    /// Generate code from a description
    ///
    /// The description must be at least 10 characters once trimmed.
    #[oai(path = "/assistant/generate", method = "post", tag = "ApiTags::Assistant")]
    async fn generate_code(&self, body: Json<GenerateCodeRequest>) -> AssistantResponse {
        let result = self
            .generate_code_use_case
            .execute(GenerateCodeParams {
                description: body.0.description,
            })
            .await;

        into_response(result)
    }

    /// Suggest optimizations for a code selection
    #[oai(path = "/assistant/optimize", method = "post", tag = "ApiTags::Assistant")]
    async fn optimize_code(&self, body: Json<CodeSelectionRequest>) -> AssistantResponse {
        let result = self
            .optimize_use_case
            .execute(OptimizeCodeParams { code: body.0.code })
            .await;

        into_response(result)
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AssistantResponse {
    #[oai(status = 200)]
    Ok(Json<AssistantReply>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 429)]
    TooManyRequests(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

fn into_response(result: Result<String, AssistantError>) -> AssistantResponse {
    match result {
        Ok(content) => AssistantResponse::Ok(Json(AssistantReply { content })),
        Err(err) => {
            let (status, json) = err.into_error_response();
            match status.as_u16() {
                422 => AssistantResponse::UnprocessableEntity(json),
                429 => AssistantResponse::TooManyRequests(json),
                500 => AssistantResponse::InternalError(json),
                _ => AssistantResponse::BadGateway(json),
            }
        }
    }
}
