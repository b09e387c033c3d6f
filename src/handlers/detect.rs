use axum::{extract::State, http::StatusCode, response::Json};
use common::{AnomalyResponse, DetectionRequest};
use tracing::{error, info, instrument};
use crate::schemas::{AppState, ErrorResponse};

/// Forward a detection request to the detection service
///
/// The upstream answer is passed through unchanged. Every upstream failure
/// (bad status, unreachable, unparseable body) is reported the same way.
#[utoipa::path(
    post,
    path = "/api/v1/detect",
    tag = "detection",
    request_body = DetectionRequest,
    responses(
        (status = 200, description = "Detection result from the detection service", body = AnomalyResponse),
        (status = 502, description = "Detection service failed or was unreachable", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn detect(
    State(state): State<AppState>,
    Json(request): Json<DetectionRequest>,
) -> Result<Json<AnomalyResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!(month = %request.month, "Forwarding detection request");

    match state.client.detect(&request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            error!("Upstream detection failed: {}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: state.locale.connection_error().to_string(),
                    code: "UPSTREAM_ERROR".to_string(),
                    success: false,
                }),
            ))
        }
    }
}
