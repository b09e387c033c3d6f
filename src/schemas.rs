use common::{AnomalyResponse, DetectionRequest, RawChartData};
use detection::{DetectionClient, Locale};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Client used to forward detection requests upstream
    pub client: Arc<dyn DetectionClient>,
    /// Upstream endpoint, reported by the health check
    pub upstream: String,
    /// Language of error messages returned to the browser
    pub locale: Locale,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Detection service the server forwards to
    pub upstream: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::detect::detect,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            DetectionRequest,
            AnomalyResponse,
            RawChartData,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "detection", description = "Anomaly detection forwarding"),
    ),
    info(
        title = "Anomalia API",
        description = "Hosts the anomaly detection page and forwards detection requests to the detection service",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
