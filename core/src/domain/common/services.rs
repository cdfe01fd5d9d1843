use std::sync::Arc;

use crate::domain::{
    common::GatewayConfig,
    contract::ports::{ImageNormalizer, LLMClient},
};

/// Application service implementing every domain port.
///
/// Holds no per-request state; one instance is shared by all handlers.
pub struct Service<LLM, IMG>
where
    LLM: LLMClient,
    IMG: ImageNormalizer,
{
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) image_normalizer: Arc<IMG>,
    pub(crate) gateway_config: GatewayConfig,
}

impl<LLM, IMG> Clone for Service<LLM, IMG>
where
    LLM: LLMClient,
    IMG: ImageNormalizer,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            image_normalizer: Arc::clone(&self.image_normalizer),
            gateway_config: self.gateway_config.clone(),
        }
    }
}

impl<LLM, IMG> Service<LLM, IMG>
where
    LLM: LLMClient,
    IMG: ImageNormalizer,
{
    pub fn new(llm_client: LLM, image_normalizer: IMG, gateway_config: GatewayConfig) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            image_normalizer: Arc::new(image_normalizer),
            gateway_config,
        }
    }

    pub fn gateway_config(&self) -> &GatewayConfig {
        &self.gateway_config
    }
}
