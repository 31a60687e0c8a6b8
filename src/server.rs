use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::{
    config::{Config, ServerConfig},
    db,
    handlers::{self, AppState},
    metrics,
    quotes::QuoteStore,
    signals::setup_signal_handlers,
};

/// Start the HTTP server
///
/// This function:
/// 1. Initializes metrics
/// 2. Opens the database and runs migrations
/// 3. Sets up signal handlers for graceful shutdown
/// 4. Binds to the configured address
/// 5. Serves requests until SIGINT/SIGTERM
pub async fn start_server(config: Config) -> Result<()> {
    info!("Uniform shop starting...");

    info!("Initializing Prometheus metrics...");
    let metrics_handle = metrics::init_metrics()?;

    let pool = db::connect(&config.database).await?;
    let app_state = AppState::new(QuoteStore::new(pool.clone()), metrics_handle);

    let (_shutdown_tx, mut shutdown_rx, signal_handle) = setup_signal_handlers();

    let app = create_router(&config.server, app_state);

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .with_context(|| format!("Invalid server.host: {}", config.server.host))?,
        config.server.port,
    ));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    signal_handle.await?;
    pool.close().await;
    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(server: &ServerConfig, app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/api/calculator/options",
            get(handlers::calculator::list_options),
        )
        .route(
            "/api/calculator/estimate",
            post(handlers::calculator::handle_estimate),
        )
        .route("/api/quotes", post(handlers::quotes::create_quote))
        .route("/api/quotes/:id", get(handlers::quotes::get_quote));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/metrics", get(handlers::metrics_handler::metrics))
        .merge(api_routes)
        .with_state(app_state)
        .layer(cors_layer(&server.cors_allowed_origins))
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    // Origins are validated when the config is loaded
    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    layer.allow_origin(origins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

    fn test_metrics_handle() -> PrometheusHandle {
        PrometheusBuilder::new().build_recorder().handle()
    }

    #[tokio::test]
    async fn test_create_router() {
        let pool = db::connect_in_memory().await.unwrap();
        let state = AppState::new(QuoteStore::new(pool), test_metrics_handle());

        let _app = create_router(&ServerConfig::default(), state);
        // Router created successfully - no panic
    }

    #[tokio::test]
    async fn test_create_router_with_cors_origins() {
        let pool = db::connect_in_memory().await.unwrap();
        let state = AppState::new(QuoteStore::new(pool), test_metrics_handle());
        let server = ServerConfig {
            cors_allowed_origins: vec!["https://shop.example.com".to_string()],
            ..ServerConfig::default()
        };

        let _app = create_router(&server, state);
    }
}
