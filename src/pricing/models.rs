use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Price multiplier stored as exact hundredths (`110` == 1.10).
///
/// Keeping multipliers integral makes the truncation in the estimate formula
/// apply to the exact decimal product instead of a binary approximation of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Multiplier(u32);

impl Multiplier {
    pub const ONE: Multiplier = Multiplier(100);

    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    pub const fn hundredths(self) -> u32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_f64())
    }
}

impl Serialize for Multiplier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// Garment category with its base price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "basePrice")]
    pub base_price: i64,
}

/// Order size tier, matched by its exact range label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuantityOption {
    pub range: &'static str,
    pub multiplier: Multiplier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FabricOption {
    pub id: &'static str,
    pub name: &'static str,
    pub multiplier: Multiplier,
}

/// Branding method with a flat price addition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrandingOption {
    pub id: &'static str,
    pub name: &'static str,
    pub price: i64,
}

/// Snapshot of all four option sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalculatorOptions {
    pub categories: &'static [CategoryOption],
    pub quantities: &'static [QuantityOption],
    pub fabrics: &'static [FabricOption],
    pub branding: &'static [BrandingOption],
}

/// Client selection to price
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub category: String,
    pub quantity: String,
    pub fabric: String,
    pub branding: String,
}

impl EstimateRequest {
    pub fn new(
        category: impl Into<String>,
        quantity: impl Into<String>,
        fabric: impl Into<String>,
        branding: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            quantity: quantity.into(),
            fabric: fabric.into(),
            branding: branding.into(),
        }
    }
}

/// Raw factors an estimate was derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateBreakdown {
    #[serde(rename = "basePrice")]
    pub base_price: i64,
    #[serde(rename = "quantityMultiplier")]
    pub quantity_multiplier: f64,
    #[serde(rename = "fabricMultiplier")]
    pub fabric_multiplier: f64,
    #[serde(rename = "brandingPrice")]
    pub branding_price: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub estimated_price: i64,
    pub breakdown: EstimateBreakdown,
}
