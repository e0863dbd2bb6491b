use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::classifier::FailureReport;
use crate::comparator::Comparison;
use crate::validator::ValidationOutcome;

/// Currency assumed when the price text carries no recognizable marker.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Normalized result of one extraction attempt for one URL.
///
/// Built once by a vendor extractor; validation and comparison only read it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    pub vendor: String,
    pub product_name: Option<String>,
    /// Price in decimal currency units.
    pub price: Option<f64>,
    pub currency: String,
    pub availability: Option<String>,
    pub source_url: String,
    /// Original text the price was parsed from, kept for diagnostics.
    pub raw_price_text: Option<String>,
}

impl PriceRecord {
    /// A record with every optional field unset and the default currency.
    pub fn empty(vendor: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            vendor: vendor.into(),
            product_name: None,
            price: None,
            currency: DEFAULT_CURRENCY.to_string(),
            availability: None,
            source_url: source_url.into(),
            raw_price_text: None,
        }
    }

    /// Compact view without diagnostics, used for per-vendor detail output.
    pub fn to_summary(&self) -> PriceSummary {
        PriceSummary {
            vendor: self.vendor.clone(),
            product_name: self.product_name.clone(),
            price: self.price,
            currency: self.currency.clone(),
            availability: self.availability.clone(),
            source_url: self.source_url.clone(),
        }
    }
}

/// [`PriceRecord`] without `raw_price_text`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSummary {
    pub vendor: String,
    pub product_name: Option<String>,
    pub price: Option<f64>,
    pub currency: String,
    pub availability: Option<String>,
    pub source_url: String,
}

/// An extracted record together with its validation outcome.
#[derive(Debug, Clone, Serialize)]
pub struct PriceCheck {
    pub record: PriceRecord,
    pub validation: ValidationOutcome,
}

impl PriceCheck {
    pub fn is_accepted(&self) -> bool {
        self.validation.accepted
    }
}

/// Everything a multi-vendor comparison produced.
///
/// `vendors` and `failures` keep the order of the input URLs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub comparison: Comparison,
    pub vendors: Vec<PriceCheck>,
    /// Number of extracted records the validator rejected.
    pub rejected: usize,
    pub failures: Vec<FailureReport>,
    pub checked_at: DateTime<Utc>,
}
