use axum::extract::{Multipart, State, multipart::MultipartRejection};
use heal_core::domain::contract::{
    entities::FoodEstimate, ports::ContractService, value_objects::EstimateFoodInput,
};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Form fields accepted for the photo, in order of preference.
pub const IMAGE_FIELDS: [&str; 3] = ["image", "file", "photo"];

#[utoipa::path(
    post,
    path = "",
    tag = "estimate",
    summary = "Estimate calories from a food photo",
    description = "Accepts a multipart upload with the photo in an `image`, `file` or `photo` field and returns a calorie and macro estimate produced by a vision model.",
    request_body(content_type = "multipart/form-data", description = "Food photo, any common image format"),
    responses(
        (status = 200, body = FoodEstimate),
        (status = 400, description = "Missing, empty or oversized image", body = ApiErrorResponse),
        (status = 415, description = "Image could not be decoded", body = ApiErrorResponse),
        (status = 502, description = "Model failed or broke the response schema", body = ApiErrorResponse)
    ),
)]
pub async fn estimate_food(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response<FoodEstimate>, ApiError> {
    let mut multipart = multipart
        .map_err(|e| ApiError::BadRequest(format!("Expected a multipart upload: {}", e)))?;

    let mut received: Vec<String> = Vec::new();
    let mut image_data: Option<(usize, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        let Some(rank) = IMAGE_FIELDS.iter().position(|candidate| *candidate == name) else {
            received.push(name);
            continue;
        };

        if image_data.as_ref().is_some_and(|(best, _)| *best <= rank) {
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        image_data = Some((rank, data.to_vec()));
    }

    let (_, image_data) = image_data.ok_or_else(|| {
        ApiError::BadRequest(format!(
            "No image file in form data. Received fields: {:?}",
            received
        ))
    })?;

    let estimate = state
        .service
        .estimate_food(EstimateFoodInput { image_data })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(estimate))
}
