use axum::Json;

use crate::error::AppError;
use crate::handlers::ApiJson;
use crate::metrics;
use crate::pricing::{self, CalculatorOptions, EstimateRequest, EstimateResult};

/// GET /api/calculator/options
pub async fn list_options() -> Json<&'static CalculatorOptions> {
    Json(pricing::resolve_options())
}

/// POST /api/calculator/estimate
pub async fn handle_estimate(
    ApiJson(request): ApiJson<EstimateRequest>,
) -> Result<Json<EstimateResult>, AppError> {
    let result = match pricing::estimate(&request) {
        Ok(result) => result,
        Err(e) => {
            metrics::record_estimate_rejected(e.field());
            return Err(e.into());
        }
    };
    metrics::record_estimate();

    tracing::debug!(
        category = %request.category,
        quantity = %request.quantity,
        estimated_price = result.estimated_price,
        "Estimate computed"
    );

    Ok(Json(result))
}
