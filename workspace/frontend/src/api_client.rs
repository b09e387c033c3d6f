use common::{AnomalyResponse, DetectionRequest};
use detection::{decode_response, DetectionError};
use gloo_net::http::Request;

/// Post the form request to the detection service.
///
/// Any status outside 200-299 is a failure; the body is only decoded on
/// success.
pub async fn detect_anomaly(
    endpoint: &str,
    request: &DetectionRequest,
) -> Result<AnomalyResponse, DetectionError> {
    log::debug!("POST request to: {}", endpoint);

    let response = Request::post(endpoint)
        .json(request)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            DetectionError::Transport(error_msg)
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            DetectionError::Transport(error_msg)
        })?;

    if !response.ok() {
        log::error!("POST {} - HTTP error: {}", endpoint, response.status());
        return Err(DetectionError::Status(response.status()));
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let body = response.text().await.map_err(|e| {
        let error_msg = format!("Failed to read response: {}", e);
        log::error!("POST {} - {}", endpoint, error_msg);
        DetectionError::Transport(error_msg)
    })?;

    let decoded = decode_response(&body)?;
    log::info!("POST {} - Success", endpoint);
    Ok(decoded)
}
