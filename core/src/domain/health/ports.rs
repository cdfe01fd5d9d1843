use crate::domain::health::entities::HealthStatus;

/// Liveness of the process. The service has no stateful dependencies to probe.
#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    fn health(&self) -> HealthStatus;
}
