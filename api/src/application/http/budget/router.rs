use super::handlers::compute_budget::{__path_compute_budget, compute_budget};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(compute_budget))]
pub struct BudgetApiDoc;

pub fn budget_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/budget", state.args.server.root_path),
        post(compute_budget),
    )
}
