use std::sync::Arc;

use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::calendar::normalizer::DateNormalizer;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Local calendar day the server treats as "today"
    pub today: String,
    /// Service version
    pub version: String,
}

pub struct Api {
    normalizer: Arc<DateNormalizer>,
}

impl Api {
    pub fn new(normalizer: Arc<DateNormalizer>) -> Self {
        Self { normalizer }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the current status of the service together with the local
    /// calendar day used for expiry calculations.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: self.normalizer.now().to_rfc3339(),
            today: self.normalizer.today().to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
