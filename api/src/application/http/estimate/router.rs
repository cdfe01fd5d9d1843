use super::handlers::estimate_food::{MAX_IMAGE_SIZE, __path_estimate_food, estimate_food};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

/// Multipart framing on top of the image itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(estimate_food))]
pub struct EstimateApiDoc;

pub fn estimate_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/estimate", state.args.server.root_path),
            post(estimate_food),
        )
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + MULTIPART_OVERHEAD))
}
