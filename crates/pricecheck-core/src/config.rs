use std::fmt;
use std::str::FromStr;

use crate::error::AppError;
use crate::vendor::KnownVendor;

/// Inclusive plausible price bounds, in currency units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Result<Self, AppError> {
        if !(min.is_finite() && max.is_finite()) || min <= 0.0 || min >= max {
            return Err(AppError::ConfigError(format!(
                "Invalid price range {min}-{max}: bounds must be positive and min < max"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        PriceCategory::Default.range()
    }
}

/// Product categories with their own plausible price ranges (USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceCategory {
    #[default]
    Default,
    Electronics,
    Appliances,
    Books,
    Clothing,
}

impl PriceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceCategory::Default => "default",
            PriceCategory::Electronics => "electronics",
            PriceCategory::Appliances => "appliances",
            PriceCategory::Books => "books",
            PriceCategory::Clothing => "clothing",
        }
    }

    pub fn range(&self) -> PriceRange {
        let (min, max) = match self {
            PriceCategory::Default => (0.01, 100_000.00),
            PriceCategory::Electronics => (10.00, 50_000.00),
            PriceCategory::Appliances => (50.00, 10_000.00),
            PriceCategory::Books => (0.99, 300.00),
            PriceCategory::Clothing => (5.00, 500.00),
        };
        PriceRange { min, max }
    }
}

impl fmt::Display for PriceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PriceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(PriceCategory::Default),
            "electronics" => Ok(PriceCategory::Electronics),
            "appliances" => Ok(PriceCategory::Appliances),
            "books" => Ok(PriceCategory::Books),
            "clothing" => Ok(PriceCategory::Clothing),
            _ => Err(format!("Unknown price category: {s}")),
        }
    }
}

/// Maps a host-name marker to the extractor for that vendor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorMarker {
    /// Lowercase substring looked up in the URL host.
    pub marker: String,
    pub vendor: KnownVendor,
}

impl VendorMarker {
    pub fn new(marker: &str, vendor: KnownVendor) -> Self {
        Self {
            marker: marker.to_lowercase(),
            vendor,
        }
    }
}

/// Environment variable naming the [`PriceCategory`] preset.
pub const CATEGORY_VAR: &str = "PRICECHECK_CATEGORY";
/// Environment variable overriding the lower price bound.
pub const MIN_PRICE_VAR: &str = "PRICECHECK_MIN_PRICE";
/// Environment variable overriding the upper price bound.
pub const MAX_PRICE_VAR: &str = "PRICECHECK_MAX_PRICE";

/// Immutable settings shared by extractor selection and validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckConfig {
    pub price_range: PriceRange,
    /// Checked in order; the first marker found in the host wins.
    pub vendor_markers: Vec<VendorMarker>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            price_range: PriceRange::default(),
            vendor_markers: vec![
                VendorMarker::new("amazon", KnownVendor::Amazon),
                VendorMarker::new("walmart", KnownVendor::Walmart),
            ],
        }
    }
}

impl CheckConfig {
    /// Start from a category preset instead of the default range.
    pub fn for_category(category: PriceCategory) -> Self {
        Self {
            price_range: category.range(),
            ..Self::default()
        }
    }

    /// Read configuration from environment variables.
    ///
    /// - `PRICECHECK_CATEGORY` (optional, defaults to `default`)
    /// - `PRICECHECK_MIN_PRICE` / `PRICECHECK_MAX_PRICE` (optional, override
    ///   the category bounds)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through `lookup`,
    /// e.g. already-parsed command-line options.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let category = match lookup(CATEGORY_VAR) {
            None => PriceCategory::Default,
            Some(raw) => raw.parse().map_err(AppError::ConfigError)?,
        };
        let preset = category.range();

        let min = parse_bound(&lookup, MIN_PRICE_VAR)?.unwrap_or(preset.min);
        let max = parse_bound(&lookup, MAX_PRICE_VAR)?.unwrap_or(preset.max);

        Ok(Self {
            price_range: PriceRange::new(min, max)?,
            ..Self::default()
        })
    }
}

fn parse_bound(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<f64>, AppError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<f64>().map(Some).map_err(|_| {
            AppError::ConfigError(format!("Invalid {key} '{raw}': must be a decimal number"))
        }),
    }
}
