pub mod models;
pub mod store;

pub use models::{NewQuoteRequest, QuoteRequest};
pub use store::QuoteStore;
