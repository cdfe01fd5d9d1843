use crate::{
    domain::common::{HealConfig, services::Service},
    infrastructure::{image::JpegImageNormalizer, llm::OpenAILLMClient},
};

pub type HealService = Service<OpenAILLMClient, JpegImageNormalizer>;

pub fn create_service(config: HealConfig) -> HealService {
    tracing::info!(
        vision_model = %config.gateway.estimate.model,
        text_model = %config.gateway.compare.model,
        base_url = %config.llm.base_url,
        "creating heal service"
    );

    Service::new(
        OpenAILLMClient::new(config.llm),
        JpegImageNormalizer::new(),
        config.gateway,
    )
}
