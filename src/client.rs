use async_trait::async_trait;
use common::{AnomalyResponse, DetectionRequest};
use detection::{decode_response, DetectionClient, DetectionError};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, instrument, warn};

/// Detection client talking to the remote service over HTTP.
///
/// One POST per call: no retries and no timeout.
#[derive(Debug, Clone)]
pub struct HttpDetectionClient {
    endpoint: String,
    client: Client,
}

impl HttpDetectionClient {
    /// Returns a new client for the given endpoint
    ///
    /// # Arguments
    ///
    /// * 'endpoint' - full URL of the detection service
    pub fn new(endpoint: &str) -> anyhow::Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self { endpoint: endpoint.to_string(), client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DetectionClient for HttpDetectionClient {
    #[instrument(skip(self, request), fields(endpoint = %self.endpoint))]
    async fn detect(&self, request: &DetectionRequest) -> detection::Result<AnomalyResponse> {
        let body = serde_json::to_string(request)
            .map_err(|e| DetectionError::Transport(format!("Failed to serialize request: {}", e)))?;
        debug!("POST body: {}", body);

        let res = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| DetectionError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            warn!("Detection service answered {}", status);
            return Err(DetectionError::Status(status.as_u16()));
        }

        let json = res
            .text()
            .await
            .map_err(|e| DetectionError::Transport(e.to_string()))?;

        decode_response(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use detection::{Completion, DetectionView, FormField};
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    type Captured = Arc<Mutex<Option<(Option<String>, String)>>>;

    /// Starts a throwaway upstream that answers every POST with `status` and
    /// `body`, remembering the content type and body it received.
    async fn spawn_upstream(status: StatusCode, body: &'static str) -> (String, Captured) {
        let captured: Captured = Arc::new(Mutex::new(None));
        let sink = captured.clone();

        let app = Router::new().route(
            "/detect_anomaly/",
            post(move |headers: HeaderMap, received: String| {
                let sink = sink.clone();
                async move {
                    let content_type = headers
                        .get(CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    *sink.lock().unwrap() = Some((content_type, received));
                    (status, body)
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}/detect_anomaly/", addr), captured)
    }

    const VALID_BODY: &str = r#"{
        "anomaly_detected": true,
        "anomaly_detected_factor": false,
        "solar_anomaly": true,
        "grafico": {
            "producao_mensal_kwh": [1,2,3,4,5,6,7,8,9,10,11,12,13],
            "linha_media_3_meses": [5,5,5,5,5,5,5,5,5,5,5,5,5],
            "linha_fator_aneel": [115.2,115.2,115.2,115.2,115.2,115.2,115.2,115.2,115.2,115.2,115.2,115.2,115.2],
            "linha_inc_solar": [4,4,4,4,4,4,4,4,4,4,4,4,4]
        }
    }"#;

    #[tokio::test]
    async fn test_posts_json_and_parses_response() {
        let (url, captured) = spawn_upstream(StatusCode::OK, VALID_BODY).await;
        let client = HttpDetectionClient::new(&url).unwrap();

        let mut view = DetectionView::default();
        view.update_field(FormField::Injection, "2750");
        view.update_field(FormField::Latitude, "not a number");

        assert_eq!(view.submit(&client).await, Completion::Applied);

        let response = view.response().expect("response should be stored");
        assert!(response.anomaly_detected);
        assert!(common::should_show_chart(response));

        let (content_type, body) = captured.lock().unwrap().clone().expect("upstream saw no request");
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let sent: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(sent["injecao"], serde_json::json!(2750.0));
        assert!(sent["latitude"].is_null());
        assert_eq!(sent["mes"], "JUL");
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let (url, _) = spawn_upstream(StatusCode::INTERNAL_SERVER_ERROR, VALID_BODY).await;
        let client = HttpDetectionClient::new(&url).unwrap();

        let request = detection::FormState::default().to_request();
        assert_eq!(client.detect(&request).await, Err(DetectionError::Status(500)));

        let mut view = DetectionView::default();
        assert_eq!(view.submit(&client).await, Completion::Failed);
        assert_eq!(view.error(), Some("failed to connect to API"));
        assert!(!view.is_busy());
    }

    #[tokio::test]
    async fn test_malformed_body_with_ok_status() {
        let (url, _) = spawn_upstream(StatusCode::OK, "{\"anomaly_detected\": tru").await;
        let client = HttpDetectionClient::new(&url).unwrap();

        let request = detection::FormState::default().to_request();
        assert!(matches!(client.detect(&request).await, Err(DetectionError::Decode(_))));

        let mut view = DetectionView::default();
        assert_eq!(view.submit(&client).await, Completion::Failed);
        assert_eq!(view.error(), Some("failed to connect to API"));
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpDetectionClient::new(&format!("http://{}/detect_anomaly/", addr)).unwrap();
        let request = detection::FormState::default().to_request();

        assert!(matches!(client.detect(&request).await, Err(DetectionError::Transport(_))));
    }
}
