use axum::extract::State;
use heal_core::domain::contract::{
    entities::MealComparison, ports::ContractService, value_objects::CompareMealInput,
};

use crate::application::http::{
    llm::validators::CompareMealValidator,
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
    path = "/compare",
    tag = "llm",
    summary = "Compare a meal against per-meal and daily targets",
    description = "Targets are either supplied explicitly or computed from a biometric profile. The model computes differences and percentages from the provided numbers only.",
    request_body = CompareMealValidator,
    responses(
        (status = 200, body = MealComparison),
        (status = 400, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
)]
pub async fn compare_meal(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CompareMealValidator>,
) -> Result<Response<MealComparison>, ApiError> {
    let input = CompareMealInput::try_from(payload)?;

    let comparison = state
        .service
        .compare_meal(input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(comparison))
}
