use axum::extract::State;
use heal_core::domain::health::{entities::HealthStatus, ports::HealthCheckService};

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = HealthStatus)
    ),
)]
pub async fn health_check(State(state): State<AppState>) -> Response<HealthStatus> {
    Response::OK(state.service.health())
}
