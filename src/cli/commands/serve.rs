use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::client::HttpDetectionClient;
use crate::config::AppConfig;
use crate::router::create_router;
use crate::schemas::AppState;

pub async fn serve(config: &AppConfig) -> Result<()> {
    trace!("Entering serve function");
    info!("Anomalia web server starting up");
    debug!("Upstream endpoint: {}", config.endpoint);
    debug!("Bind address: {}", config.bind_address);

    let client = HttpDetectionClient::new(&config.endpoint)?;
    let state = AppState {
        upstream: client.endpoint().to_string(),
        client: Arc::new(client),
        locale: config.locale,
    };

    // Create router
    trace!("Creating application router");
    let app = create_router(state, config.static_dir.as_deref());
    if config.static_dir.is_none() {
        info!("No static directory configured, only the API is served");
    }

    // Start server
    trace!("Attempting to bind TCP listener to {}", config.bind_address);
    let listener = match TcpListener::bind(&config.bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", config.bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", config.bind_address, e);
            return Err(e.into());
        }
    };

    info!("Anomalia server running on http://{}", config.bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", config.bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
