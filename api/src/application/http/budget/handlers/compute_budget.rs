use axum::extract::State;
use heal_core::domain::budget::{entities::BudgetResult, ports::BudgetService};

use crate::application::http::{
    budget::validators::BudgetValidator,
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
    path = "",
    tag = "budget",
    summary = "Compute daily and per-meal calorie budget",
    description = "Derives daily calorie and macro targets from a biometric profile (Mifflin-St Jeor BMR times activity factor) and splits them across meals.",
    request_body = BudgetValidator,
    responses(
        (status = 200, body = BudgetResult),
        (status = 400, body = ApiErrorResponse)
    ),
)]
pub async fn compute_budget(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<BudgetValidator>,
) -> Result<Response<BudgetResult>, ApiError> {
    let result = state.service.compute_budget(payload.into());

    Ok(Response::OK(result))
}
