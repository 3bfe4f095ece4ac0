use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub status: String,
    pub system_info: SystemInfo,
}

/// Build and runtime details reported by the health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SystemInfo {
    pub environment: String,
    pub version: String,
}

/// Simple health service that can be used by any API surface
///
/// Reports the service as available together with the environment it runs in and the
/// application version.
#[derive(Clone, Debug)]
pub struct HealthService {
    environment: String,
    version: String,
}

impl HealthService {
    /// Creates a new instance of HealthService.
    ///
    /// # Arguments
    /// * `environment` - Operating environment name (e.g. "development")
    /// * `version` - Application version string
    pub fn new(environment: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            version: version.into(),
        }
    }

    /// Returns a `HealthRes` indicating the service is available.
    pub fn check_health(&self) -> HealthRes {
        HealthRes {
            status: "available".into(),
            system_info: SystemInfo {
                environment: self.environment.clone(),
                version: self.version.clone(),
            },
        }
    }
}
