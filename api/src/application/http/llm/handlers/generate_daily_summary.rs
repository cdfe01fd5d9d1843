use axum::extract::State;
use heal_core::domain::contract::{entities::DailySummary, ports::ContractService};

use crate::application::http::{
    llm::validators::DailySummaryValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/daily_summary",
    tag = "llm",
    summary = "Summarize a day of meals",
    request_body = DailySummaryValidator,
    responses(
        (status = 200, body = DailySummary),
        (status = 400, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
)]
pub async fn generate_daily_summary(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DailySummaryValidator>,
) -> Result<Response<DailySummary>, ApiError> {
    let summary = state
        .service
        .generate_daily_summary(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(summary))
}
