use axum::extract::State;
use heal_core::domain::contract::{entities::SuggestionSet, ports::ContractService};

use crate::application::http::{
    llm::validators::SuggestionsValidator,
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
    path = "/suggestions",
    tag = "llm",
    summary = "Suggest adjustments for a meal",
    description = "Proposes portion, swap, order and timing actions for an estimated meal given the remaining targets.",
    request_body = SuggestionsValidator,
    responses(
        (status = 200, body = SuggestionSet),
        (status = 400, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
)]
pub async fn generate_suggestions(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SuggestionsValidator>,
) -> Result<Response<SuggestionSet>, ApiError> {
    let suggestions = state
        .service
        .generate_suggestions(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(suggestions))
}
