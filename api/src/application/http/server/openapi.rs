use utoipa::OpenApi;

use crate::application::http::{
    budget::router::BudgetApiDoc, estimate::router::EstimateApiDoc,
    health::router::HealthApiDoc, llm::router::LlmApiDoc,
    server::api_entities::api_error::ApiErrorResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Heal API",
        description = "Food photo calorie estimates, calorie budgets and LLM meal coaching"
    ),
    components(schemas(ApiErrorResponse)),
    nest(
        (path = "/estimate", api = EstimateApiDoc),
        (path = "/budget", api = BudgetApiDoc),
        (path = "/llm", api = LlmApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
