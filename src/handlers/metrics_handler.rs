use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::handlers::AppState;

/// Handle /metrics endpoint
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, state.metrics.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::QuoteStore;
    use metrics_exporter_prometheus::PrometheusBuilder;

    #[tokio::test]
    async fn test_metrics_handler() {
        // Handle without installing the global recorder
        let handle = PrometheusBuilder::new().build_recorder().handle();
        let pool = crate::db::connect_in_memory().await.unwrap();
        let state = AppState::new(QuoteStore::new(pool), handle);

        let response = metrics(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
