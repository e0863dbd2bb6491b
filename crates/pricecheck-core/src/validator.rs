use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::PriceRange;
use crate::models::PriceRecord;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)$",
    )
    .expect("valid URL regex")
});

/// Why a record was accepted or rejected. Checks run in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationReason {
    Passed,
    MissingPrice,
    NonPositivePrice,
    OutOfRange,
    InvalidUrl,
    MissingProductName,
}

impl ValidationReason {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationReason::Passed => "Validation passed",
            ValidationReason::MissingPrice => "Price not extracted",
            ValidationReason::NonPositivePrice => "Invalid price value (must be positive)",
            ValidationReason::OutOfRange => "Price outside reasonable range",
            ValidationReason::InvalidUrl => "Invalid or missing URL",
            ValidationReason::MissingProductName => "Product name not extracted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub accepted: bool,
    pub reason: ValidationReason,
    pub message: &'static str,
}

impl From<ValidationReason> for ValidationOutcome {
    fn from(reason: ValidationReason) -> Self {
        Self {
            accepted: reason == ValidationReason::Passed,
            reason,
            message: reason.message(),
        }
    }
}

/// Plausibility checks for extracted prices.
///
/// The first failing check decides the outcome; invalid input is a normal
/// rejection, never an error.
#[derive(Debug, Clone, Default)]
pub struct PriceValidator {
    range: PriceRange,
}

impl PriceValidator {
    pub fn new(range: PriceRange) -> Self {
        Self { range }
    }

    pub fn validate(
        &self,
        price: Option<f64>,
        url: &str,
        product_name: Option<&str>,
        vendor: &str,
    ) -> ValidationOutcome {
        let reason = self.check(price, url, product_name);
        if reason != ValidationReason::Passed {
            tracing::debug!(%vendor, %url, ?price, ?reason, "Price rejected");
        }
        reason.into()
    }

    pub fn validate_record(&self, record: &PriceRecord) -> ValidationOutcome {
        self.validate(
            record.price,
            &record.source_url,
            record.product_name.as_deref(),
            &record.vendor,
        )
    }

    fn check(&self, price: Option<f64>, url: &str, product_name: Option<&str>) -> ValidationReason {
        let Some(price) = price else {
            return ValidationReason::MissingPrice;
        };
        if price <= 0.0 {
            return ValidationReason::NonPositivePrice;
        }
        if !self.range.contains(price) {
            return ValidationReason::OutOfRange;
        }
        if !is_valid_url(url) {
            return ValidationReason::InvalidUrl;
        }
        if product_name.is_none_or(|name| name.trim().is_empty()) {
            return ValidationReason::MissingProductName;
        }
        ValidationReason::Passed
    }
}

/// Absolute `http`/`https` URL with a dotted host.
pub fn is_valid_url(url: &str) -> bool {
    URL_RE.is_match(url)
}

/// A vendor label is usable when it is not blank.
pub fn is_valid_vendor(vendor: &str) -> bool {
    !vendor.trim().is_empty()
}
