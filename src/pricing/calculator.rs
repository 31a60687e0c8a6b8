use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::pricing::models::{CalculatorOptions, EstimateBreakdown, EstimateRequest, EstimateResult};
use crate::pricing::options::{self, CATALOG};

/// Request field that failed to resolve against its option set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimateField {
    Category,
    Quantity,
    Fabric,
    Branding,
}

impl EstimateField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Quantity => "quantity",
            Self::Fabric => "fabric",
            Self::Branding => "branding",
        }
    }
}

impl fmt::Display for EstimateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    #[error("Invalid calculator parameters")]
    InvalidParameters { field: EstimateField },
}

impl EstimateError {
    pub fn field(&self) -> EstimateField {
        match self {
            Self::InvalidParameters { field } => *field,
        }
    }
}

/// Snapshot of the compiled-in option sets
pub fn resolve_options() -> &'static CalculatorOptions {
    &CATALOG
}

/// Price a selection against the compiled-in catalog.
///
/// `total = floor(base × quantity × fabric) + branding`, truncating after both
/// multipliers and before the branding fee. Fields are checked in request
/// order and the first one that does not resolve is reported.
pub fn estimate(request: &EstimateRequest) -> Result<EstimateResult, EstimateError> {
    let category = options::find_category(&request.category)
        .ok_or_else(|| invalid(EstimateField::Category, &request.category))?;
    let quantity = options::find_quantity(&request.quantity)
        .ok_or_else(|| invalid(EstimateField::Quantity, &request.quantity))?;
    let fabric = options::find_fabric(&request.fabric)
        .ok_or_else(|| invalid(EstimateField::Fabric, &request.fabric))?;
    let branding = options::find_branding(&request.branding)
        .ok_or_else(|| invalid(EstimateField::Branding, &request.branding))?;

    // Both multipliers are hundredths, so the product is scaled by 10_000.
    let scaled = category.base_price
        * i64::from(quantity.multiplier.hundredths())
        * i64::from(fabric.multiplier.hundredths());
    let estimated_price = scaled.div_euclid(10_000) + branding.price;

    Ok(EstimateResult {
        estimated_price,
        breakdown: EstimateBreakdown {
            base_price: category.base_price,
            quantity_multiplier: quantity.multiplier.as_f64(),
            fabric_multiplier: fabric.multiplier.as_f64(),
            branding_price: branding.price,
        },
    })
}

fn invalid(field: EstimateField, value: &str) -> EstimateError {
    debug!(field = %field, value = %value, "Calculator option not found");
    EstimateError::InvalidParameters { field }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(category: &str, quantity: &str, fabric: &str, branding: &str) -> EstimateRequest {
        EstimateRequest::new(category, quantity, fabric, branding)
    }

    #[test]
    fn test_estimate_shirts_embroidery() {
        let result = estimate(&request("shirts", "51-100", "cotton", "embroidery")).unwrap();

        assert_eq!(result.estimated_price, 1470);
        assert_eq!(result.breakdown.base_price, 1200);
        assert_eq!(result.breakdown.quantity_multiplier, 1.1);
        assert_eq!(result.breakdown.fabric_multiplier, 1.0);
        assert_eq!(result.breakdown.branding_price, 150);
    }

    #[test]
    fn test_estimate_truncates_exact_product() {
        // 3500 × 1.5 × 1.4 is exactly 7350
        let result = estimate(&request("suits", "1-10", "wool", "both")).unwrap();
        assert_eq!(result.estimated_price, 7550);
    }

    #[test]
    fn test_estimate_discount_tier() {
        let result = estimate(&request("aprons", "501+", "polyester", "none")).unwrap();
        assert_eq!(result.estimated_price, 576);
    }

    #[test]
    fn test_estimate_premium_print() {
        let result = estimate(&request("workwear", "101-500", "premium", "print")).unwrap();
        assert_eq!(result.estimated_price, 3320);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = estimate(&request("invalid", "51-100", "cotton", "none")).unwrap_err();
        assert_eq!(err, EstimateError::InvalidParameters { field: EstimateField::Category });
        assert_eq!(err.to_string(), "Invalid calculator parameters");
    }

    #[test]
    fn test_empty_quantity_rejected() {
        let err = estimate(&request("shirts", "", "cotton", "none")).unwrap_err();
        assert_eq!(err.field(), EstimateField::Quantity);
    }

    #[test]
    fn test_first_invalid_field_reported() {
        let err = estimate(&request("shirts", "51-100", "Wool", "glitter")).unwrap_err();
        assert_eq!(err.field(), EstimateField::Fabric);
    }

    #[test]
    fn test_resolve_options_is_catalog() {
        let options = resolve_options();
        assert_eq!(options.categories.len(), 6);
        assert_eq!(options.quantities.len(), 5);
        assert_eq!(options.fabrics.len(), 4);
        assert_eq!(options.branding.len(), 4);
        assert!(std::ptr::eq(options, resolve_options()));
    }
}
