use crate::domain::{
    common::services::Service,
    contract::ports::{ImageNormalizer, LLMClient},
    health::{entities::HealthStatus, ports::HealthCheckService},
};

impl<LLM, IMG> HealthCheckService for Service<LLM, IMG>
where
    LLM: LLMClient,
    IMG: ImageNormalizer,
{
    fn health(&self) -> HealthStatus {
        HealthStatus::ok()
    }
}
