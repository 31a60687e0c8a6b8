use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::metrics;
use crate::pricing::{self, EstimateRequest, EstimateResult};
use crate::quotes::models::{NewQuoteRequest, QuoteRequest};

pub const STATUS_NEW: &str = "new";
pub const DEFAULT_LIST_LIMIT: u32 = 50;
pub const MAX_LIST_LIMIT: u32 = 200;

#[derive(Debug, FromRow)]
struct QuoteRow {
    id: String,
    name: String,
    phone: String,
    email: Option<String>,
    company: Option<String>,
    comment: Option<String>,
    calculator: Option<String>,
    estimate: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<QuoteRow> for QuoteRequest {
    type Error = AppError;

    fn try_from(row: QuoteRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| AppError::InternalError(format!("Corrupt quote id {}: {}", row.id, e)))?;
        let calculator = row
            .calculator
            .as_deref()
            .map(serde_json::from_str::<EstimateRequest>)
            .transpose()?;
        let estimate = row
            .estimate
            .as_deref()
            .map(serde_json::from_str::<EstimateResult>)
            .transpose()?;

        Ok(QuoteRequest {
            id,
            name: row.name,
            phone: row.phone,
            email: row.email,
            company: row.company,
            comment: row.comment,
            calculator,
            estimate,
            status: row.status,
            created_at: row.created_at,
        })
    }
}

/// SQLite-backed storage for quote requests
#[derive(Clone)]
pub struct QuoteStore {
    db_pool: SqlitePool,
}

impl QuoteStore {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db_pool
    }

    /// Validate, price and persist a new quote request.
    ///
    /// The estimate is always recomputed from the calculator selection, so a
    /// stored estimate matches the catalog at the time of submission.
    pub async fn create(&self, input: NewQuoteRequest) -> Result<QuoteRequest, AppError> {
        let input = input.normalize()?;
        let estimate = input.calculator.as_ref().map(pricing::estimate).transpose()?;

        let quote = QuoteRequest {
            id: Uuid::new_v4(),
            name: input.name,
            phone: input.phone,
            email: input.email,
            company: input.company,
            comment: input.comment,
            calculator: input.calculator,
            estimate,
            status: STATUS_NEW.to_string(),
            created_at: Utc::now(),
        };

        let calculator_json = quote.calculator.as_ref().map(serde_json::to_string).transpose()?;
        let estimate_json = quote.estimate.as_ref().map(serde_json::to_string).transpose()?;

        sqlx::query(
            r#"
            INSERT INTO quote_requests (
                id, name, phone, email, company, comment,
                calculator, estimate, status, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(quote.id.to_string())
        .bind(&quote.name)
        .bind(&quote.phone)
        .bind(&quote.email)
        .bind(&quote.company)
        .bind(&quote.comment)
        .bind(calculator_json)
        .bind(estimate_json)
        .bind(&quote.status)
        .bind(quote.created_at)
        .execute(&self.db_pool)
        .await?;

        metrics::record_quote_created(quote.estimate.is_some());
        info!(
            quote_id = %quote.id,
            estimated_price = ?quote.estimate.map(|e| e.estimated_price),
            "Quote request stored"
        );

        Ok(quote)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<QuoteRequest>, AppError> {
        let row = sqlx::query_as::<_, QuoteRow>(
            r#"
            SELECT id, name, phone, email, company, comment,
                   calculator, estimate, status, created_at
            FROM quote_requests
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.db_pool)
        .await?;

        row.map(QuoteRequest::try_from).transpose()
    }

    /// Most recent quote requests first; `limit` is clamped to `1..=MAX_LIST_LIMIT`
    pub async fn list_recent(&self, limit: u32) -> Result<Vec<QuoteRequest>, AppError> {
        let limit = limit.clamp(1, MAX_LIST_LIMIT);

        let rows = sqlx::query_as::<_, QuoteRow>(
            r#"
            SELECT id, name, phone, email, company, comment,
                   calculator, estimate, status, created_at
            FROM quote_requests
            ORDER BY created_at DESC
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.db_pool)
        .await?;

        rows.into_iter().map(QuoteRequest::try_from).collect()
    }
}
