#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use async_trait::async_trait;
    use axum::Router;
    use common::{AnomalyResponse, DetectionRequest};
    use detection::{DetectionClient, DetectionError, Locale};
    use std::path::Path;
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Detection client answering every request with the same outcome and
    /// recording what it was asked.
    pub struct StubClient {
        outcome: Result<AnomalyResponse, DetectionError>,
        pub requests: Mutex<Vec<DetectionRequest>>,
    }

    impl StubClient {
        pub fn new(outcome: Result<AnomalyResponse, DetectionError>) -> Self {
            Self { outcome, requests: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl DetectionClient for StubClient {
        async fn detect(&self, request: &DetectionRequest) -> detection::Result<AnomalyResponse> {
            self.requests.lock().unwrap().push(request.clone());
            self.outcome.clone()
        }
    }

    /// Create AppState for testing around the given stub
    pub fn setup_test_app_state(client: Arc<StubClient>, locale: Locale) -> AppState {
        AppState {
            client,
            upstream: "http://upstream.test/detect_anomaly/".to_string(),
            locale,
        }
    }

    /// Initialize tracing for tests with output to the test writer.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set. The subscriber is installed globally
    /// once; later calls are no-ops.
    pub fn init_test_tracing() {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let _ = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    }

    /// Create axum app for testing
    pub fn setup_test_app(client: Arc<StubClient>, static_dir: Option<&Path>) -> Router {
        init_test_tracing();

        let state = setup_test_app_state(client, Locale::En);
        create_router(state, static_dir)
    }
}
