use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::handlers::{ApiJson, AppState};
use crate::quotes::{NewQuoteRequest, QuoteRequest};

/// POST /api/quotes
pub async fn create_quote(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewQuoteRequest>,
) -> Result<(StatusCode, Json<QuoteRequest>), AppError> {
    let quote = state.quotes.create(input).await?;
    Ok((StatusCode::CREATED, Json(quote)))
}

/// GET /api/quotes/:id
pub async fn get_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuoteRequest>, AppError> {
    // An unparseable id cannot exist in the store
    let not_found = || AppError::NotFound(format!("Quote request {} not found", id));

    let uuid = Uuid::parse_str(&id).map_err(|_| not_found())?;
    state
        .quotes
        .get(uuid)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}
