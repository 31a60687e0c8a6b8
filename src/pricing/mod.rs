pub mod calculator;
pub mod models;
pub mod options;

pub use calculator::{estimate, resolve_options, EstimateError, EstimateField};
pub use models::{
    BrandingOption, CalculatorOptions, CategoryOption, EstimateBreakdown, EstimateRequest,
    EstimateResult, FabricOption, Multiplier, QuantityOption,
};
