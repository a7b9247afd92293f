use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{SecondsFormat, Utc};
use core_config::AppInfo;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Value of `status` while the process is serving requests
pub const HEALTH_OK: &str = "OK";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// RFC 3339 UTC timestamp with millisecond precision
    pub timestamp: String,
    pub version: String,
}

impl HealthResponse {
    pub fn now(version: &str) -> Self {
        Self {
            status: HEALTH_OK.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            version: version.to_string(),
        }
    }
}

/// Health check endpoint handler.
///
/// Always returns 200 while the service is running.
pub async fn health_handler(State(app): State<AppInfo>) -> Response {
    (StatusCode::OK, Json(HealthResponse::now(app.version))).into_response()
}

/// Creates a router with the /health endpoint.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::health_router;
/// use core_config::app_info;
///
/// let app = Router::new().merge(health_router(app_info!()));
/// ```
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app_info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::DateTime;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    const INFO: AppInfo = AppInfo {
        name: "health-test",
        version: "1.0.0",
    };

    #[tokio::test]
    async fn test_health_returns_ok_payload() {
        let response = health_router(INFO)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: HealthResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.status, "OK");
        assert_eq!(body.version, "1.0.0");
        assert!(DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
        assert!(body.timestamp.ends_with('Z'));
    }

    #[tokio::test]
    async fn test_health_rejects_post() {
        let response = health_router(INFO)
            .oneshot(
                Request::post("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
