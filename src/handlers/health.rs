use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::handlers::AppState;

/// Health check endpoint
/// Returns 200 OK if the service is running
pub async fn health_check() -> impl IntoResponse {
    let body = json!({
        "status": "healthy",
        "service": "uniform-shop",
        "version": env!("CARGO_PKG_VERSION"),
    });
    (StatusCode::OK, Json(body))
}

/// Readiness check endpoint
/// Returns 200 OK once the database answers, 503 otherwise
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let (status, label) = match crate::db::ping(state.quotes.pool()).await {
        Ok(()) => (StatusCode::OK, "ready"),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };
    let body = json!({
        "status": label,
        "service": "uniform-shop",
    });
    (status, Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::QuoteStore;
    use metrics_exporter_prometheus::PrometheusBuilder;

    fn test_metrics_handle() -> metrics_exporter_prometheus::PrometheusHandle {
        PrometheusBuilder::new().build_recorder().handle()
    }

    #[tokio::test]
    async fn test_health_check_returns_ok() {
        let response = health_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readiness_check_returns_ok() {
        let pool = crate::db::connect_in_memory().await.unwrap();
        let state = AppState::new(QuoteStore::new(pool), test_metrics_handle());

        let response = readiness_check(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readiness_check_fails_when_pool_closed() {
        let pool = crate::db::connect_in_memory().await.unwrap();
        pool.close().await;
        let state = AppState::new(QuoteStore::new(pool), test_metrics_handle());

        let response = readiness_check(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
