pub mod calculator;
pub mod health;
pub mod metrics_handler;
pub mod quotes;

use axum::extract::FromRequest;
use metrics_exporter_prometheus::PrometheusHandle;

use crate::error::AppError;
use crate::quotes::QuoteStore;

/// JSON body extractor whose rejections use the `AppError` envelope
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Shared state for request handlers
#[derive(Clone)]
pub struct AppState {
    pub quotes: QuoteStore,
    pub metrics: PrometheusHandle,
}

impl AppState {
    pub fn new(quotes: QuoteStore, metrics: PrometheusHandle) -> Self {
        Self { quotes, metrics }
    }
}
