use super::handlers::{
    compare_meal::{__path_compare_meal, compare_meal},
    generate_copy::{__path_generate_copy, generate_copy},
    generate_daily_summary::{__path_generate_daily_summary, generate_daily_summary},
    generate_suggestions::{__path_generate_suggestions, generate_suggestions},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    compare_meal,
    generate_suggestions,
    generate_copy,
    generate_daily_summary
))]
pub struct LlmApiDoc;

pub fn llm_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/llm/compare", state.args.server.root_path),
            post(compare_meal),
        )
        .route(
            &format!("{}/llm/suggestions", state.args.server.root_path),
            post(generate_suggestions),
        )
        .route(
            &format!("{}/llm/copy", state.args.server.root_path),
            post(generate_copy),
        )
        .route(
            &format!("{}/llm/daily_summary", state.args.server.root_path),
            post(generate_daily_summary),
        )
}
