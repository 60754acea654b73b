//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::state::AppState;
use crate::web::dto::health::{CheckStatus, HealthChecks, HealthResponse};

/// Returns service health status with upstream checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Backend reachable
/// - **503 Service Unavailable**: Backend unreachable or failing
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "backend": {
///       "status": "ok",
///       "message": "Reachable, status 200"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let backend = check_backend(&state).await;
    let healthy = backend.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { backend },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks the backend with a company listing request.
///
/// Any answer below 500 counts as reachable.
async fn check_backend(state: &AppState) -> CheckStatus {
    match state.backend.get("empresas").await {
        Ok(response) if response.status < 500 => {
            CheckStatus::ok(format!("Reachable, status {}", response.status))
        }
        Ok(response) => CheckStatus::error(format!("Backend error, status {}", response.status)),
        Err(e) => CheckStatus::error(format!("Backend unreachable: {e}")),
    }
}
