use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::pricing::{EstimateRequest, EstimateResult};

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_PHONE_LEN: usize = 50;
pub const MAX_COMMENT_LEN: usize = 2000;

/// Customer inquiry as submitted by the site
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewQuoteRequest {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub calculator: Option<EstimateRequest>,
}

impl NewQuoteRequest {
    /// Trim fields, drop blank optionals and enforce the length limits
    pub fn normalize(self) -> Result<Self, AppError> {
        let name = required("name", self.name, MAX_NAME_LEN)?;
        let phone = required("phone", self.phone, MAX_PHONE_LEN)?;
        let comment = optional(self.comment);

        if let Some(comment) = &comment {
            if comment.chars().count() > MAX_COMMENT_LEN {
                return Err(AppError::ValidationError {
                    field: "comment",
                    message: format!("comment must be at most {} characters", MAX_COMMENT_LEN),
                });
            }
        }

        Ok(Self {
            name,
            phone,
            email: optional(self.email),
            company: optional(self.company),
            comment,
            calculator: self.calculator,
        })
    }
}

fn required(field: &'static str, value: String, max_len: usize) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::ValidationError {
            field,
            message: format!("{} is required", field),
        });
    }
    if value.chars().count() > max_len {
        return Err(AppError::ValidationError {
            field,
            message: format!("{} must be at most {} characters", field, max_len),
        });
    }
    Ok(value.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Persisted quote request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub company: Option<String>,
    pub comment: Option<String>,
    pub calculator: Option<EstimateRequest>,
    pub estimate: Option<EstimateResult>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
