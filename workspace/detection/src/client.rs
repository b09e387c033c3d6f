use async_trait::async_trait;
use common::{AnomalyResponse, DetectionRequest};

use crate::error::Result;

/// Anything able to run one detection round trip.
///
/// The CLI and the server use a reqwest implementation; tests use stubs.
#[async_trait]
pub trait DetectionClient: Send + Sync {
    async fn detect(&self, request: &DetectionRequest) -> Result<AnomalyResponse>;
}

/// Parses a success body into a detection result.
///
/// Shared by every transport so a malformed body fails the same way no
/// matter who fetched it.
pub fn decode_response(body: &str) -> Result<AnomalyResponse> {
    Ok(serde_json::from_str(body)?)
}
