use axum::extract::State;
use heal_core::domain::contract::{entities::ReminderCopy, ports::ContractService};

use crate::application::http::{
    llm::validators::CopyValidator,
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
    path = "/copy",
    tag = "llm",
    summary = "Generate notification copy",
    description = "Returns short reminder or over-limit lines. Placeholders such as {meal_name} are left for the client to fill in.",
    request_body = CopyValidator,
    responses(
        (status = 200, body = ReminderCopy),
        (status = 400, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
)]
pub async fn generate_copy(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CopyValidator>,
) -> Result<Response<ReminderCopy>, ApiError> {
    let copy = state
        .service
        .generate_copy(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(copy))
}
