use image::codecs::jpeg::JpegEncoder;

use crate::domain::{
    common::entities::app_errors::CoreError,
    contract::{ports::ImageNormalizer, value_objects::NormalizedImage},
};

pub const JPEG_QUALITY: u8 = 92;

/// Decodes any format the `image` crate understands and re-encodes it as an
/// RGB JPEG. Alpha channels are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegImageNormalizer;

impl JpegImageNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl ImageNormalizer for JpegImageNormalizer {
    fn normalize(&self, raw: &[u8]) -> Result<NormalizedImage, CoreError> {
        if raw.is_empty() {
            return Err(CoreError::InvalidInput("empty image file".to_string()));
        }

        let decoded = image::load_from_memory(raw).map_err(|e| {
            tracing::warn!("Could not decode uploaded image: {}", e);
            CoreError::UnsupportedInput(format!("could not decode image: {}", e))
        })?;
        let rgb = decoded.to_rgb8();

        let mut data = Vec::new();
        JpegEncoder::new_with_quality(&mut data, JPEG_QUALITY)
            .encode_image(&rgb)
            .map_err(|e| {
                tracing::error!("Failed to encode JPEG: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(NormalizedImage {
            mime_type: "image/jpeg".to_string(),
            data,
        })
    }
}
