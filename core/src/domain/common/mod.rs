use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_VISION_MODEL: &str = "gpt-4o";
pub const DEFAULT_TEXT_MODEL: &str = "gpt-4o-mini";

#[derive(Clone, Debug)]
pub struct HealConfig {
    pub llm: LLMConfig,
    pub gateway: GatewayConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub api_key: String,
    pub base_url: String,
}

/// Model, temperature and timeout used for one gateway operation.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationSettings {
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl OperationSettings {
    pub fn new(model: impl Into<String>, temperature: f32, timeout_secs: u64) -> Self {
        Self {
            model: model.into(),
            temperature,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GatewayConfig {
    pub estimate: OperationSettings,
    pub compare: OperationSettings,
    pub suggestions: OperationSettings,
    pub copy: OperationSettings,
    pub daily_summary: OperationSettings,
}

impl GatewayConfig {
    pub fn with_models(vision_model: &str, text_model: &str) -> Self {
        Self {
            estimate: OperationSettings::new(vision_model, 0.2, 60),
            compare: OperationSettings::new(text_model, 0.0, 45),
            suggestions: OperationSettings::new(text_model, 0.2, 60),
            copy: OperationSettings::new(text_model, 0.5, 45),
            daily_summary: OperationSettings::new(text_model, 0.2, 60),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::with_models(DEFAULT_VISION_MODEL, DEFAULT_TEXT_MODEL)
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
