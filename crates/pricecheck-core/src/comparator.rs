//! Cross-vendor price statistics.

use serde::Serialize;

use crate::models::PriceRecord;

/// Outlier detection needs at least this many prices.
pub const MIN_OUTLIER_SAMPLE: usize = 4;

/// Aggregate statistics over the priced records of one comparison.
///
/// Reported numbers are rounded to 2 decimal places; min/max selection and
/// outlier membership are decided on the unrounded values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub min_price: f64,
    pub max_price: f64,
    pub average_price: f64,
    /// `max_price - min_price`.
    pub price_spread: f64,
    /// Spread as a percentage of the average price.
    pub price_spread_percent: f64,
    pub cheapest_vendor: String,
    pub most_expensive_vendor: String,
    pub price_count: usize,
    pub outliers: Vec<f64>,
}

/// Result of comparing a set of records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Comparison {
    /// No records were supplied.
    NoData,
    /// Records were supplied but none carried a price.
    NoValidPrices,
    Summary(ComparisonSummary),
}

impl Comparison {
    /// Serialized `status` tag.
    pub fn status(&self) -> &'static str {
        match self {
            Comparison::NoData => "no_data",
            Comparison::NoValidPrices => "no_valid_prices",
            Comparison::Summary(_) => "summary",
        }
    }

    pub fn summary(&self) -> Option<&ComparisonSummary> {
        match self {
            Comparison::Summary(summary) => Some(summary),
            _ => None,
        }
    }
}

pub struct PriceComparator;

impl PriceComparator {
    /// Compare prices across records. Records without a finite price are ignored.
    pub fn compare(records: &[PriceRecord]) -> Comparison {
        if records.is_empty() {
            return Comparison::NoData;
        }

        let priced: Vec<(&str, f64)> = records
            .iter()
            .filter_map(|r| {
                r.price
                    .filter(|p| p.is_finite())
                    .map(|p| (r.vendor.as_str(), p))
            })
            .collect();
        if priced.is_empty() {
            return Comparison::NoValidPrices;
        }

        let prices: Vec<f64> = priced.iter().map(|(_, p)| *p).collect();
        let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = prices.iter().sum::<f64>() / prices.len() as f64;
        let spread = max - min;
        let spread_percent = if mean > 0.0 {
            spread / mean * 100.0
        } else {
            0.0
        };

        // First occurrence in input order wins ties.
        let vendor_at = |target: f64| {
            priced
                .iter()
                .find(|(_, p)| *p == target)
                .map(|(vendor, _)| vendor.to_string())
                .unwrap_or_default()
        };

        Comparison::Summary(ComparisonSummary {
            min_price: round2(min),
            max_price: round2(max),
            average_price: round2(mean),
            price_spread: round2(spread),
            price_spread_percent: round2(spread_percent),
            cheapest_vendor: vendor_at(min),
            most_expensive_vendor: vendor_at(max),
            price_count: prices.len(),
            outliers: detect_outliers(&prices).into_iter().map(round2).collect(),
        })
    }
}

/// Prices outside `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]`, in input order.
///
/// Quartiles are read at floor-indexed positions `len / 4` and `3 * len / 4`
/// of the sorted prices, without interpolation. Fewer than
/// [`MIN_OUTLIER_SAMPLE`] prices never produce outliers.
pub fn detect_outliers(prices: &[f64]) -> Vec<f64> {
    if prices.len() < MIN_OUTLIER_SAMPLE {
        return Vec::new();
    }

    let mut sorted = prices.to_vec();
    sorted.sort_by(f64::total_cmp);
    let q1 = sorted[sorted.len() / 4];
    let q3 = sorted[3 * sorted.len() / 4];
    let iqr = q3 - q1;
    let lower = q1 - 1.5 * iqr;
    let upper = q3 + 1.5 * iqr;

    prices
        .iter()
        .copied()
        .filter(|p| *p < lower || *p > upper)
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
