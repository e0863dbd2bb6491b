pub mod classifier;
pub mod comparator;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod selector;
pub mod service;
pub mod traits;
pub mod validator;
pub mod vendor;

#[cfg(test)]
pub(crate) mod testutil;

pub use classifier::{ErrorClassifier, FailureKind, FailureReport};
pub use comparator::{Comparison, ComparisonSummary, PriceComparator, detect_outliers};
pub use config::{
    CATEGORY_VAR, CheckConfig, MAX_PRICE_VAR, MIN_PRICE_VAR, PriceCategory, PriceRange,
    VendorMarker,
};
pub use error::AppError;
pub use models::{ComparisonReport, DEFAULT_CURRENCY, PriceCheck, PriceRecord, PriceSummary};
pub use parser::{detect_currency, parse_price};
pub use selector::ExtractorSelector;
pub use service::PriceService;
pub use traits::{Document, DocumentParser, Fetcher};
pub use validator::{
    PriceValidator, ValidationOutcome, ValidationReason, is_valid_url, is_valid_vendor,
};
pub use vendor::{KnownVendor, VendorExtractor};
